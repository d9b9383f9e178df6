//! # H5SURF
//!
//! Render a two-dimensional dataset from a HDF5 file as a 3D surface plot.
//!
//! The dataset is read in full with the [bindings to the official HDF5
//! library](https://docs.rs/hdf5-metno), laid out on an index [mesh](mesh::Mesh), shaded with a
//! fixed diverging [colormap](colormap::CoolWarm) and written to a PNG image through
//! [plotters](https://docs.rs/plotters).
//!
//! ## Usage
//!
//! Open a file, read a dataset and save the figure:
//!
//! ```no_run
//! use h5surf::prelude::*;
//!
//! let src = Source::open("density.h5").unwrap();
//! let surface = src.read_surface("EDOS").unwrap();
//!
//! let opts = PlotOptions::default();
//! let fig = Figure::new(&surface, &opts).unwrap();
//! fig.save(opts.output_path(surface.name())).unwrap();
//! ```
//!
//! The `h5surf` binary does exactly this for `figures/<dataset>.png`, and `h5surflst` lists the
//! datasets of a file.

#[macro_use]
extern crate anyhow;

pub mod colormap;
pub mod config;
pub mod mesh;
pub mod render;
pub mod source;
pub mod surface;

pub mod prelude {
    pub use super::colormap::{ColorMap, CoolWarm, Normalize};
    pub use super::config::PlotOptions;
    pub use super::mesh::Mesh;
    pub use super::render::{Figure, Limits};
    pub use super::source::{DatasetInfo, Datatype, Shape, Source};
    pub use super::surface::{surface_dims, Surface};
}
