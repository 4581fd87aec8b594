//! Parameter definitions with physical units and documented semantics.
//!
//! Defaults reproduce the reference frame sequence:
//! - 150 m x 150 m grid sampled 100 x 100
//! - 2.1 m dominant swell, 20 m wavelength, heading 45°
//! - 5 short waves of 0.11 m, 1000 frames at 0.2 s

mod ocean;
mod render;

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

// Re-export all types
pub use ocean::{SeaState, ShortWaveMode, STANDARD_GRAVITY};
pub use render::{frame_file_name, RecordingConfig, RenderConfig};

/// Complete run configuration, loadable from a RON file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub sea_state: SeaState,
    pub recording: RecordingConfig,
    pub render: RenderConfig,
}

impl SimulationConfig {
    /// Parse a RON document. Missing fields take their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Load a RON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.sea_state.validate()?;
        self.recording.validate()?;
        self.render.validate()
    }
}
