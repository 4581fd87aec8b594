//! Heatmap figure: color-mapped elevation, axes, color bar and title.

use image::{Rgb, RgbImage};

use super::colormap::{ColorScale, Colormap};
use super::font::{self, put_pixel_clipped};
use crate::ocean::WaveField;
use crate::params::RenderConfig;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Number of labelled ticks on each axis and on the color bar
const TICK_COUNT: usize = 5;

/// Pixel rectangle, half-open on the right and bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    fn right(&self) -> i64 {
        self.x + self.width
    }

    fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

/// Figure regions derived from the image size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub plot: Rect,
    pub colorbar: Rect,
    /// Base text scale; the title is drawn at twice this
    pub text_scale: u32,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        let text_scale = (width.min(height) / 450).max(1);
        let s = text_scale as i64;
        let pad = 4 * s;
        let text_h = font::text_height(text_scale) as i64;
        let label_w = font::text_width("-00.0", text_scale) as i64;
        let title_h = font::text_height(text_scale * 2) as i64;

        let top = title_h + 4 * text_h;
        let bottom = pad + text_h + pad + text_h + 2 * pad;
        let left = pad + text_h + pad + label_w + 2 * pad;
        let bar_w = (width as i64 / 40).max(12);
        let right = 6 * pad + bar_w + pad + label_w + pad + text_h + 2 * pad;

        let plot = Rect {
            x: left,
            y: top,
            width: (width as i64 - left - right).max(1),
            height: (height as i64 - top - bottom).max(1),
        };
        let colorbar = Rect {
            x: plot.right() + 6 * pad,
            y: plot.y,
            width: bar_w,
            height: plot.height,
        };

        Self {
            plot,
            colorbar,
            text_scale,
        }
    }
}

/// Rasterizes wave fields into annotated heatmap figures
#[derive(Debug, Clone)]
pub struct HeatmapRenderer {
    config: RenderConfig,
    scale: ColorScale,
    layout: Layout,
}

impl HeatmapRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let scale = ColorScale::new(Colormap::BLUES_R, config.color_range_m);
        let layout = Layout::new(config.image_width, config.image_height);
        Self {
            config,
            scale,
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Figure title for a simulated time
    pub fn title(&self, time_s: f64) -> String {
        format!("{} (t={:.1}s)", self.config.title, time_s)
    }

    /// Render the full figure for `field`
    pub fn render(&self, field: &WaveField) -> RgbImage {
        let mut img =
            RgbImage::from_pixel(self.config.image_width, self.config.image_height, BACKGROUND);

        self.draw_field(&mut img, field);
        self.draw_axes(&mut img, field);
        self.draw_colorbar(&mut img);
        self.draw_title(&mut img, field.time_s);

        img
    }

    /// Nearest-cell sampling, origin at the lower-left corner
    fn draw_field(&self, img: &mut RgbImage, field: &WaveField) {
        let plot = self.layout.plot;
        let (rows, cols) = field.dim();
        if rows == 0 || cols == 0 {
            return;
        }

        for py in 0..plot.height {
            let row = ((plot.height - 1 - py) as usize * rows) / plot.height as usize;
            for px in 0..plot.width {
                let col = (px as usize * cols) / plot.width as usize;
                let color = self
                    .scale
                    .color(field.elevation[[row, col]])
                    .unwrap_or(BACKGROUND);
                put_pixel_clipped(img, plot.x + px, plot.y + py, color);
            }
        }
    }

    fn draw_axes(&self, img: &mut RgbImage, field: &WaveField) {
        let plot = self.layout.plot;
        let text_scale = self.layout.text_scale;
        let s = text_scale as i64;
        let text_h = font::text_height(text_scale) as i64;
        let tick_len = 2 * s;

        stroke_rect(img, plot, s);

        let (rows, cols) = field.dim();
        if rows == 0 || cols == 0 {
            return;
        }
        let x_extent = cell_extent(field.x[[0, 0]], field.x[[0, cols - 1]], cols);
        let y_extent = cell_extent(field.y[[0, 0]], field.y[[rows - 1, 0]], rows);

        for value in tick_values(field.x[[0, 0]], field.x[[0, cols - 1]]) {
            let Some(offset) = axis_offset(value, x_extent, plot.width) else {
                continue;
            };
            let px = plot.x + offset;
            fill_rect(
                img,
                Rect {
                    x: px,
                    y: plot.bottom(),
                    width: s,
                    height: tick_len,
                },
            );

            let label = format_tick(value);
            let w = font::text_width(&label, text_scale) as i64;
            let y = plot.bottom() + tick_len + s;
            font::draw_text(img, &label, px - w / 2, y, text_scale, INK);
        }

        for value in tick_values(field.y[[0, 0]], field.y[[rows - 1, 0]]) {
            let Some(offset) = axis_offset(value, y_extent, plot.height) else {
                continue;
            };
            let py = plot.bottom() - 1 - offset;
            fill_rect(
                img,
                Rect {
                    x: plot.x - tick_len,
                    y: py,
                    width: tick_len,
                    height: s,
                },
            );

            let label = format_tick(value);
            let w = font::text_width(&label, text_scale) as i64;
            let x = plot.x - tick_len - s - w;
            font::draw_text(img, &label, x, py - text_h / 2, text_scale, INK);
        }

        let caption = "X (m)";
        let w = font::text_width(caption, text_scale) as i64;
        let y = plot.bottom() + tick_len + 2 * s + text_h + 4 * s;
        font::draw_text(img, caption, plot.x + (plot.width - w) / 2, y, text_scale, INK);

        let caption = "Y (m)";
        let h = font::text_width(caption, text_scale) as i64;
        let y = plot.y + (plot.height - h) / 2;
        font::draw_text_vertical(img, caption, 4 * s, y, text_scale, INK);
    }

    fn draw_colorbar(&self, img: &mut RgbImage) {
        let bar = self.layout.colorbar;
        let text_scale = self.layout.text_scale;
        let s = text_scale as i64;
        let text_h = font::text_height(text_scale) as i64;
        let span = (bar.height - 1).max(1) as f64;

        for py in 0..bar.height {
            let t = 1.0 - py as f64 / span;
            let color = self.scale.colormap.sample(t);
            for px in 0..bar.width {
                put_pixel_clipped(img, bar.x + px, bar.y + py, color);
            }
        }
        stroke_rect(img, bar, s);

        let (min, max) = (self.scale.min, self.scale.max);
        let mut label_right = bar.right();
        for i in 0..TICK_COUNT {
            let value = min + (max - min) * i as f64 / (TICK_COUNT - 1) as f64;
            let py = bar.bottom() - 1 - ((self.scale.normalize(value) * span).round() as i64);
            fill_rect(
                img,
                Rect {
                    x: bar.right(),
                    y: py,
                    width: 2 * s,
                    height: s,
                },
            );

            let label = format!("{:.1}", value);
            let x = bar.right() + 3 * s;
            font::draw_text(img, &label, x, py - text_h / 2, text_scale, INK);
            label_right = label_right.max(x + font::text_width(&label, text_scale) as i64);
        }

        let caption = "Wave Height (m)";
        let h = font::text_width(caption, text_scale) as i64;
        let y = bar.y + (bar.height - h) / 2;
        font::draw_text_vertical(img, caption, label_right + 4 * s, y, text_scale, INK);
    }

    fn draw_title(&self, img: &mut RgbImage, time_s: f64) {
        let plot = self.layout.plot;
        let title_scale = self.layout.text_scale * 2;
        let title = self.title(time_s);
        let w = font::text_width(&title, title_scale) as i64;
        let h = font::text_height(title_scale) as i64;
        let y = (plot.y - h) / 2;
        font::draw_text(img, &title, plot.x + (plot.width - w) / 2, y, title_scale, INK);
    }
}

/// Axis extent covered by `n` cells centered on evenly spaced samples
fn cell_extent(first: f64, last: f64, n: usize) -> (f64, f64) {
    let half = if n > 1 {
        (last - first) / (n - 1) as f64 / 2.0
    } else {
        0.5
    };
    (first - half, last + half)
}

/// Pixel offset of `value` along an axis of `length` pixels
fn axis_offset(value: f64, (lo, hi): (f64, f64), length: i64) -> Option<i64> {
    let t = (value - lo) / (hi - lo);
    if !t.is_finite() {
        return None;
    }
    Some(((t * length as f64) as i64).clamp(0, length - 1))
}

/// Evenly spaced tick values from `first` to `last`
fn tick_values(first: f64, last: f64) -> impl Iterator<Item = f64> {
    (0..TICK_COUNT).map(move |i| first + (last - first) * i as f64 / (TICK_COUNT - 1) as f64)
}

/// Whole numbers without decimals, everything else with one
fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn fill_rect(img: &mut RgbImage, rect: Rect) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            put_pixel_clipped(img, x, y, INK);
        }
    }
}

/// Outline drawn just outside `rect`
fn stroke_rect(img: &mut RgbImage, rect: Rect, thickness: i64) {
    let outer = Rect {
        x: rect.x - thickness,
        y: rect.y - thickness,
        width: rect.width + 2 * thickness,
        height: rect.height + 2 * thickness,
    };
    fill_rect(img, Rect { height: thickness, ..outer });
    fill_rect(img, Rect { y: rect.bottom(), height: thickness, ..outer });
    fill_rect(img, Rect { width: thickness, ..outer });
    fill_rect(img, Rect { x: rect.right(), width: thickness, ..outer });
}
