//! Heatmap rendering and frame export.

mod colormap;
mod font;
mod heatmap;

use log::debug;
use std::path::Path;

pub use colormap::{ColorScale, Colormap};
pub use heatmap::{HeatmapRenderer, Layout, Rect};

use crate::error::Result;
use crate::ocean::WaveField;
use crate::params::RenderConfig;

/// Receives synthesized frames in order
///
/// `path` is where the frame belongs; its directory already exists.
pub trait FrameSink {
    fn write_frame(&mut self, index: usize, path: &Path, field: &WaveField) -> Result<()>;
}

/// Renders each frame to a PNG file
pub struct PngFrameWriter {
    renderer: HeatmapRenderer,
}

impl PngFrameWriter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: HeatmapRenderer::new(config),
        }
    }
}

impl FrameSink for PngFrameWriter {
    fn write_frame(&mut self, index: usize, path: &Path, field: &WaveField) -> Result<()> {
        let img = self.renderer.render(field);
        img.save_with_format(path, image::ImageFormat::Png)?;
        debug!("Wrote frame {} to {}", index, path.display());
        Ok(())
    }
}
