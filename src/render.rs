//! Drawing a surface as a 3D figure.
use std::path::Path;

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::colormap::{ColorMap, CoolWarm, Normalize};
use crate::config::PlotOptions;
use crate::mesh::Mesh;
use crate::surface::Surface;

/// Axis limits of a figure.
///
/// `x` spans the row index, `y` the column index and `z` the values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

/// Widen an empty interval so that it can be mapped onto an axis.
///
/// `[v, v]` becomes `[v - 5%, v + 5%]` of `|v|`, or `[-0.05, 0.05]` around zero. Non-empty
/// intervals are returned as is.
fn nonsingular((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo != hi {
        (lo, hi)
    } else if lo == 0.0 {
        (-0.05, 0.05)
    } else {
        (lo - 0.05 * lo.abs(), hi + 0.05 * hi.abs())
    }
}

impl Limits {
    /// Limits for a surface: the index axes cover the mesh, the value axis is exactly the value
    /// range.
    pub fn for_surface(surface: &Surface) -> Result<Limits, anyhow::Error> {
        let (d0, d1) = surface.dims();
        let z = surface.value_range()?;

        Ok(Limits {
            x: nonsingular((0.0, d0.saturating_sub(1) as f64)),
            y: nonsingular((0.0, d1.saturating_sub(1) as f64)),
            z: nonsingular(z),
        })
    }
}

/// A figure holding one surface.
pub struct Figure<'a> {
    surface: &'a Surface,
    mesh: Mesh,
    limits: Limits,
    size: (u32, u32),
    yaw: f64,
    pitch: f64,
}

impl<'a> Figure<'a> {
    pub fn new(surface: &'a Surface, opts: &PlotOptions) -> Result<Figure<'a>, anyhow::Error> {
        let (d0, d1) = surface.dims();
        let limits = Limits::for_surface(surface)?;
        debug!("limits for '{}': {:?}", surface.name(), limits);

        Ok(Figure {
            surface,
            mesh: Mesh::new(d0, d1),
            limits,
            size: opts.size,
            yaw: opts.yaw,
            pitch: opts.pitch,
        })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Labels of the x, y and value axes.
    pub fn labels(&self) -> [&str; 3] {
        ["x", "y", self.surface.name()]
    }

    /// Relative distance of cell `(i, j)` from the viewer, larger is further away.
    ///
    /// plotters turns the scene by `yaw` about the value axis and tips it by `pitch`. For yaw in
    /// `(0, pi/2)` the row axis runs away from the viewer and the column axis towards it.
    fn depth(&self, i: usize, j: usize) -> f64 {
        let (d0, d1) = self.mesh.dims();
        let u = (i as f64 + 0.5) / d0 as f64;
        let v = (j as f64 + 0.5) / d1 as f64;

        self.yaw.sin() * u - self.yaw.cos() * self.pitch.cos() * v
    }

    /// Lower corners of the cells in painting order, furthest first.
    fn draw_order(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<(f64, usize, usize)> = self
            .mesh
            .cells()
            .map(|(i, j)| (self.depth(i, j), i, j))
            .collect();
        cells.sort_by(|a, b| b.0.total_cmp(&a.0));

        cells.into_iter().map(|(_, i, j)| (i, j)).collect()
    }

    /// Corners `(x, value, y)` of every drawable cell in painting order, taken from the mesh grid.
    /// Cells with a non-finite corner are left out.
    fn quads(&self) -> Vec<[(f64, f64, f64); 4]> {
        let z = self.surface.values();
        let (gx, gy) = self.mesh.grid();

        self.draw_order()
            .into_iter()
            .filter_map(|(i, j)| {
                let corners = [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)];
                let quad = corners.map(|(a, b)| (gx[[a, b]] as f64, z[[a, b]], gy[[a, b]] as f64));

                quad.iter().all(|p| p.1.is_finite()).then_some(quad)
            })
            .collect()
    }

    /// Filled quads of the surface, shaded by the mean of their corners.
    fn polygons(&self) -> Vec<Polygon<(f64, f64, f64)>> {
        let norm = Normalize::new(self.limits.z.0, self.limits.z.1);

        self.quads()
            .into_iter()
            .map(|quad| {
                let mean = quad.iter().map(|p| p.1).sum::<f64>() / 4.0;
                let color = CoolWarm.color(norm.apply(mean));

                Polygon::new(quad.to_vec(), color.filled())
            })
            .collect()
    }

    /// Axis labels placed on the edges of the axis box, so they stay inside the chart.
    fn axis_labels(&self) -> Vec<(String, (f64, f64, f64))> {
        let Limits { x, y, z } = self.limits;
        let mid = |(lo, hi): (f64, f64)| (lo + hi) / 2.0;
        let [lx, ly, lz] = self.labels();

        vec![
            (lx.to_string(), (mid(x), z.0, y.1)),
            (ly.to_string(), (x.1, z.0, mid(y))),
            (lz.to_string(), (x.0, mid(z), y.0)),
        ]
    }

    /// Draw the figure onto `root`.
    pub fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), anyhow::Error>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let Limits { x, y, z } = self.limits;

        root.fill(&WHITE)?;

        let mut chart =
            ChartBuilder::on(root)
                .margin(20)
                .build_cartesian_3d(x.0..x.1, z.0..z.1, y.0..y.1)?;

        chart.with_projection(|mut pb| {
            pb.yaw = self.yaw;
            pb.pitch = self.pitch;
            pb.scale = 0.8;
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.15))
            .max_light_lines(3)
            .draw()?;

        chart.draw_series(self.polygons())?;

        let font = ("sans-serif", 16).into_font();
        chart.draw_series(
            self.axis_labels()
                .into_iter()
                .map(|(s, c)| Text::new(s, c, font.clone())),
        )?;

        Ok(())
    }

    /// Render the figure and write it as an image to `path`.
    ///
    /// The directory of `path` must exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), anyhow::Error> {
        let path = path.as_ref();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            ensure!(dir.is_dir(), "output directory {:?} does not exist", dir);
        }

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        self.draw(&root)?;
        root.present()?;

        info!("wrote {:?}", path);

        Ok(())
    }
}
