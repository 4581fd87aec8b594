//! Rendering and recording configuration.

use serde::Deserialize;
use std::path::PathBuf;

use super::ocean::ShortWaveMode;
use crate::error::{Result, WaveMapError};

/// Heatmap figure configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Figure width (pixels)
    pub image_width: u32,

    /// Figure height (pixels)
    pub image_height: u32,

    /// Elevation mapped to the ends of the colormap (meters)
    pub color_range_m: (f64, f64),

    /// Title text shown before the simulated time
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            // 12 x 11 inch figure at 100 dpi
            image_width: 1200,
            image_height: 1100,
            color_range_m: (-2.0, 2.0),
            title: "Ocean Waves".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.image_width < 200 || self.image_height < 160 {
            return Err(WaveMapError::InvalidConfig(format!(
                "image must be at least 200x160 pixels, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        let (lo, hi) = self.color_range_m;
        if !(lo < hi && lo.is_finite() && hi.is_finite()) {
            return Err(WaveMapError::InvalidConfig(format!(
                "color range must satisfy min < max, got ({}, {})",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// Frame sequence configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordingConfig {
    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Number of frames to render
    pub num_frames: usize,

    /// Simulated time between frames (seconds)
    pub time_step_s: f64,

    /// RNG seed for short waves (None = seeded from OS entropy)
    pub seed: Option<u64>,

    /// Whether short waves are redrawn each frame
    pub short_wave_mode: ShortWaveMode,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("wave_frames"),
            num_frames: 1000,
            time_step_s: 0.2,
            seed: None,
            short_wave_mode: ShortWaveMode::RedrawEachFrame,
        }
    }
}

impl RecordingConfig {
    /// Simulated time of a frame (seconds)
    pub fn frame_time(&self, frame: usize) -> f64 {
        frame as f64 * self.time_step_s
    }

    /// Frame file path, zero-padded to three digits
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.output_dir.join(frame_file_name(frame))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.time_step_s.is_finite() {
            return Err(WaveMapError::InvalidConfig(format!(
                "time step must be finite, got {}",
                self.time_step_s
            )));
        }
        Ok(())
    }
}

/// File name for a frame index
pub fn frame_file_name(frame: usize) -> String {
    format!("frame_{:03}.png", frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_naming() {
        assert_eq!(frame_file_name(0), "frame_000.png");
        assert_eq!(frame_file_name(42), "frame_042.png");
        assert_eq!(frame_file_name(999), "frame_999.png");
        assert_eq!(frame_file_name(1000), "frame_1000.png");
    }

    #[test]
    fn test_frame_time_and_path() {
        let config = RecordingConfig::default();
        assert_eq!(config.frame_time(0), 0.0);
        assert!((config.frame_time(5) - 1.0).abs() < 1e-12);
        assert_eq!(
            config.frame_path(7),
            PathBuf::from("wave_frames").join("frame_007.png")
        );
    }

    #[test]
    fn test_render_config_validation() {
        assert!(RenderConfig::default().validate().is_ok());

        let flat = RenderConfig {
            color_range_m: (1.0, 1.0),
            ..Default::default()
        };
        assert!(flat.validate().is_err());

        let tiny = RenderConfig {
            image_width: 64,
            ..Default::default()
        };
        assert!(tiny.validate().is_err());
    }
}
