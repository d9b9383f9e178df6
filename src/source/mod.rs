//! Reading datasets from HDF5 files.
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use hdf5::{File, Group};
use log::debug;
use ndarray::Ix2;

use crate::surface::{surface_dims, Surface};

mod types;

pub use types::Datatype;

/// Dimensions of a dataset, displayed like a Python tuple: `(64, 64)`, `(5,)` or `()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape(pub Vec<usize>);

impl Shape {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [d] => write!(f, "({d},)"),
            dims => {
                let dims: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
                write!(f, "({})", dims.join(", "))
            }
        }
    }
}

/// Name, shape and element type of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInfo {
    pub name: String,
    pub shape: Shape,
    pub dtype: Datatype,
}

impl DatasetInfo {
    fn from_dataset(name: &str, ds: &hdf5::Dataset) -> Result<DatasetInfo, anyhow::Error> {
        Ok(DatasetInfo {
            name: name.to_string(),
            shape: Shape(ds.shape()),
            dtype: ds.dtype()?.into(),
        })
    }
}

/// An open HDF5 file. The file is closed when the source is dropped.
pub struct Source {
    path: PathBuf,
    file: File,
}

impl Source {
    /// Open an existing HDF5 file for reading.
    pub fn open<P>(path: P) -> Result<Source, anyhow::Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("opening {path:?}");

        let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;

        Ok(Source {
            path: path.into(),
            file,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a dataset by its exact name.
    fn lookup(&self, name: &str) -> Result<hdf5::Dataset, anyhow::Error> {
        if name.is_empty() || !self.file.link_exists(name) {
            return Err(anyhow!("dataset '{}' not found in {:?}", name, self.path));
        }

        self.file
            .dataset(name)
            .with_context(|| format!("'{}' in {:?} is not a dataset", name, self.path))
    }

    /// Shape and type of the dataset `name`.
    pub fn dataset(&self, name: &str) -> Result<DatasetInfo, anyhow::Error> {
        let ds = self.lookup(name)?;
        DatasetInfo::from_dataset(name, &ds)
    }

    /// Read the two-dimensional dataset `name` in full.
    pub fn read_surface(&self, name: &str) -> Result<Surface, anyhow::Error> {
        let ds = self.lookup(name)?;
        let info = DatasetInfo::from_dataset(name, &ds)?;

        ensure!(
            surface_dims(info.shape.as_slice()).is_some(),
            "dataset '{}' has shape {}, expected two dimensions",
            name,
            info.shape
        );
        ensure!(
            info.dtype.is_numeric(),
            "dataset '{}' has non-numeric type {}",
            name,
            info.dtype
        );

        let values = ds
            .read::<f64, Ix2>()
            .with_context(|| format!("failed to read values of '{name}'"))?;
        debug!("read {} values from '{}'", values.len(), name);

        Ok(Surface::new(name, values))
    }

    /// All datasets in the file, recursing into groups.
    pub fn datasets(&self) -> Result<Vec<DatasetInfo>, anyhow::Error> {
        let mut infos = Vec::new();
        visit(&self.file, &mut infos)?;
        Ok(infos)
    }
}

fn visit(group: &Group, infos: &mut Vec<DatasetInfo>) -> Result<(), anyhow::Error> {
    for ds in group.datasets()? {
        let name = ds.name();
        infos.push(DatasetInfo::from_dataset(name.trim_start_matches('/'), &ds)?);
    }

    for g in group.groups()? {
        visit(&g, infos)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, Array2};
    use tempfile::TempDir;

    fn fixture(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("fixture.h5");
        let f = File::create(&path).unwrap();

        let edos = Array2::from_shape_fn((4, 3), |(i, j)| (i * 3 + j) as f32);
        f.new_dataset::<f32>()
            .shape((4, 3))
            .create("EDOS")
            .unwrap()
            .write(&edos)
            .unwrap();

        let line = Array::from_vec(vec![1i32, 2, 3, 4, 5]);
        f.new_dataset::<i32>()
            .shape(5)
            .create("line")
            .unwrap()
            .write(&line)
            .unwrap();

        let counts = Array2::from_shape_fn((2, 5), |(i, j)| (i * 100 + j * 30) as u8);
        f.new_dataset::<u8>()
            .shape((2, 5))
            .create("counts")
            .unwrap()
            .write(&counts)
            .unwrap();

        let g = f.create_group("grp").unwrap();
        let flags = Array2::from_elem((2, 2), true);
        g.new_dataset::<bool>()
            .shape((2, 2))
            .create("flags")
            .unwrap()
            .write(&flags)
            .unwrap();

        path
    }

    #[test]
    fn shape_display() {
        assert_eq!(Shape(vec![64, 64]).to_string(), "(64, 64)");
        assert_eq!(Shape(vec![5]).to_string(), "(5,)");
        assert_eq!(Shape(vec![2, 3, 4]).to_string(), "(2, 3, 4)");
        assert_eq!(Shape(vec![]).to_string(), "()");
    }

    #[test]
    fn dataset_info() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        let info = src.dataset("EDOS").unwrap();
        assert_eq!(info.shape, Shape(vec![4, 3]));
        assert_eq!(info.dtype, Datatype::Float(4));

        let info = src.dataset("line").unwrap();
        assert_eq!(info.shape, Shape(vec![5]));
    }

    #[test]
    fn lookup_is_exact() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        assert!(src.dataset("edos").is_err());
        assert!(src.dataset("EDO").is_err());
        assert!(src.dataset("").is_err());

        let err = src.dataset("missing").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn group_is_not_a_dataset() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        assert!(src.dataset("grp").is_err());
        assert!(src.dataset("grp/flags").is_ok());
    }

    #[test]
    fn read_surface_as_f64() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        let s = src.read_surface("EDOS").unwrap();
        assert_eq!(s.dims(), (4, 3));
        assert_eq!(s.values()[[0, 0]], 0.0);
        assert_eq!(s.values()[[3, 2]], 11.0);
        assert_eq!(s.values()[[1, 0]], 3.0);
    }

    #[test]
    fn read_integer_surface_as_f64() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        assert_eq!(src.dataset("counts").unwrap().dtype, Datatype::UInt(1));

        let s = src.read_surface("counts").unwrap();
        assert_eq!(s.dims(), (2, 5));
        assert_eq!(s.values()[[0, 0]], 0.0);
        assert_eq!(s.values()[[0, 4]], 120.0);
        assert_eq!(s.values()[[1, 3]], 190.0);
        assert_eq!(s.value_range().unwrap(), (0.0, 220.0));
    }

    #[test]
    fn read_surface_rejects_wrong_rank() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        assert!(src.read_surface("line").is_err());
    }

    #[test]
    fn read_surface_rejects_non_numeric() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        let err = src.read_surface("grp/flags").unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn list_datasets() {
        let dir = TempDir::new().unwrap();
        let src = Source::open(fixture(&dir)).unwrap();

        let mut names: Vec<String> = src.datasets().unwrap().into_iter().map(|d| d.name).collect();
        names.sort();

        assert_eq!(names, ["EDOS", "counts", "grp/flags", "line"]);
    }

    #[test]
    fn open_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(Source::open(dir.path().join("nope.h5")).is_err());
    }
}
