//! Sequential colormaps and value-to-color scaling.

use image::Rgb;

/// ColorBrewer "Blues", light to dark
const BLUES: [[u8; 3]; 9] = [
    [0xf7, 0xfb, 0xff],
    [0xde, 0xeb, 0xf7],
    [0xc6, 0xdb, 0xef],
    [0x9e, 0xca, 0xe1],
    [0x6b, 0xae, 0xd6],
    [0x42, 0x92, 0xc6],
    [0x21, 0x71, 0xb5],
    [0x08, 0x51, 0x9c],
    [0x08, 0x30, 0x6b],
];

/// Piecewise-linear colormap over evenly spaced stops
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    stops: &'static [[u8; 3]],
    reversed: bool,
}

impl Colormap {
    /// Blues, light at the low end
    pub const BLUES: Colormap = Colormap {
        stops: &BLUES,
        reversed: false,
    };

    /// Reversed Blues: troughs dark navy, crests near white
    pub const BLUES_R: Colormap = Colormap {
        stops: &BLUES,
        reversed: true,
    };

    /// Color at normalized position `t`, clamped to [0, 1]
    pub fn sample(&self, t: f64) -> Rgb<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };

        let last = self.stops.len() - 1;
        let pos = t * last as f64;
        let lower = (pos.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let frac = pos - lower as f64;

        let a = self.stops[lower];
        let b = self.stops[upper];
        Rgb(std::array::from_fn(|i| {
            (a[i] as f64 + (b[i] as f64 - a[i] as f64) * frac).round() as u8
        }))
    }
}

/// Maps elevations in [min, max] onto a colormap
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    pub colormap: Colormap,
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn new(colormap: Colormap, (min, max): (f64, f64)) -> Self {
        Self { colormap, min, max }
    }

    /// Normalized position of `value`, unclamped
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Color for `value`; out-of-range values saturate, NaN has no color
    pub fn color(&self, value: f64) -> Option<Rgb<u8>> {
        if value.is_nan() {
            return None;
        }
        Some(self.colormap.sample(self.normalize(value)))
    }
}
