use std::path::PathBuf;

/// Output location and appearance of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Directory the figure is written to. It is not created.
    pub output_dir: String,

    /// Extension appended to the dataset name, including the dot.
    pub extension: String,

    /// Image size in pixels.
    pub size: (u32, u32),

    /// Rotation of the view about the value axis, in radians.
    pub yaw: f64,

    /// Elevation of the view, in radians.
    pub pitch: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            output_dir: "figures".into(),
            extension: ".png".into(),
            size: (640, 480),
            yaw: 0.5,
            pitch: 0.3,
        }
    }
}

impl PlotOptions {
    /// Path of the figure for dataset `name`: `<output_dir>/<name><extension>`.
    ///
    /// The name is concatenated as is, a name with slashes points into subdirectories.
    pub fn output_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}/{}{}", self.output_dir, name, self.extension))
    }
}
