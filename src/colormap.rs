//! Mapping of scalar values to colors.
use plotters::style::RGBColor;

/// A mapping from `[0, 1]` to colors.
pub trait ColorMap {
    /// Color at `t`, clamped to `[0, 1]`.
    fn color(&self, t: f64) -> RGBColor;
}

/// Linear normalization of `[vmin, vmax]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Normalize {
        Normalize { vmin, vmax }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let w = self.vmax - self.vmin;
        if w == 0.0 {
            0.5
        } else {
            (v - self.vmin) / w
        }
    }
}

/// Moreland's diverging cool-warm map, blue through grey to red.
const COOLWARM: [(u8, u8, u8); 33] = [
    (59, 76, 192),
    (68, 90, 204),
    (77, 104, 215),
    (87, 117, 225),
    (98, 130, 234),
    (108, 142, 241),
    (119, 154, 247),
    (130, 165, 251),
    (141, 176, 254),
    (152, 185, 255),
    (163, 194, 255),
    (174, 201, 253),
    (184, 208, 249),
    (194, 213, 244),
    (204, 217, 238),
    (213, 219, 230),
    (221, 221, 221),
    (229, 216, 209),
    (236, 211, 197),
    (241, 204, 185),
    (245, 196, 173),
    (247, 187, 160),
    (247, 177, 148),
    (247, 166, 135),
    (244, 154, 123),
    (241, 141, 111),
    (236, 127, 99),
    (229, 112, 88),
    (222, 96, 77),
    (213, 80, 66),
    (203, 62, 56),
    (192, 40, 47),
    (180, 4, 38),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CoolWarm;

impl ColorMap for CoolWarm {
    fn color(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };

        let n = COOLWARM.len() - 1;
        let x = t * n as f64;
        let i = (x.floor() as usize).min(n - 1);
        let f = x - i as f64;

        let (r0, g0, b0) = COOLWARM[i];
        let (r1, g1, b1) = COOLWARM[i + 1];
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;

        RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }
}
