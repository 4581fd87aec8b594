//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::params::{ShortWaveMode, SimulationConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavemap")]
#[command(about = "Render synthetic ocean waves as heatmap frames", long_about = None)]
pub struct Args {
    /// RON config file (missing fields use built-in defaults)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of frames to render
    #[arg(long, value_name = "COUNT")]
    pub frames: Option<usize>,

    /// Simulated time between frames
    #[arg(long, value_name = "SECONDS")]
    pub time_step: Option<f64>,

    /// Directory to write frames into
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// RNG seed for short waves (random if omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Grid samples per axis
    #[arg(long, value_name = "SAMPLES")]
    pub grid_size: Option<usize>,

    /// Draw short waves once and reuse them for every frame
    #[arg(long)]
    pub freeze_short_waves: bool,
}

impl Args {
    /// Resolve defaults, then the config file, then command-line overrides
    pub fn build_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                println!("Config: {}", path.display());
                SimulationConfig::load(path)?
            }
            None => SimulationConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut SimulationConfig) {
        if let Some(frames) = self.frames {
            config.recording.num_frames = frames;
        }
        if let Some(time_step) = self.time_step {
            config.recording.time_step_s = time_step;
        }
        if let Some(dir) = &self.output_dir {
            config.recording.output_dir = dir.clone();
        }
        if self.seed.is_some() {
            config.recording.seed = self.seed;
        }
        if let Some(grid_size) = self.grid_size {
            config.sea_state.grid_size = grid_size;
        }
        if self.freeze_short_waves {
            config.recording.short_wave_mode = ShortWaveMode::FixedPerRun;
        }
    }
}
