//! Frame driver: steps simulated time and hands each field to a sink.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use crate::error::Result;
use crate::ocean::{draw_short_waves, WaveFieldSynthesizer};
use crate::params::{RecordingConfig, SeaState, ShortWaveMode};
use crate::rendering::FrameSink;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames_written: usize,
    pub output_dir: PathBuf,
}

/// Sequential frame loop over a sea state
pub struct FrameDriver<R: Rng> {
    synthesizer: WaveFieldSynthesizer,
    sea_state: SeaState,
    recording: RecordingConfig,
    rng: R,
}

impl FrameDriver<StdRng> {
    /// Driver seeded from `recording.seed`, or from OS entropy if unset
    pub fn from_config(sea_state: SeaState, recording: RecordingConfig) -> Self {
        let rng = match recording.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(sea_state, recording, rng)
    }
}

impl<R: Rng> FrameDriver<R> {
    pub fn with_rng(sea_state: SeaState, recording: RecordingConfig, rng: R) -> Self {
        Self {
            synthesizer: WaveFieldSynthesizer::new(),
            sea_state,
            recording,
            rng,
        }
    }

    /// Render every frame into `sink`
    ///
    /// Creates the output directory first. The first failing frame aborts the
    /// run; frames written before it stay on disk.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> Result<RunSummary> {
        let output_dir = self.recording.output_dir.clone();
        std::fs::create_dir_all(&output_dir)?;

        let main_wavelength = self.sea_state.main_wavelength_m;
        if main_wavelength.is_nan() || main_wavelength <= 0.0 {
            warn!(
                "Main wavelength {} m is not positive, elevations will be non-finite",
                main_wavelength
            );
        }

        let fixed_short_waves = match self.recording.short_wave_mode {
            ShortWaveMode::FixedPerRun => Some(draw_short_waves(&self.sea_state, &mut self.rng)),
            ShortWaveMode::RedrawEachFrame => None,
        };

        info!(
            "Rendering {} frames ({:.2} s step) into {}",
            self.recording.num_frames,
            self.recording.time_step_s,
            output_dir.display()
        );

        for frame in 0..self.recording.num_frames {
            let time_s = self.recording.frame_time(frame);
            let field = match &fixed_short_waves {
                Some(short_waves) => {
                    self.synthesizer
                        .synthesize_with(&self.sea_state, short_waves, time_s)
                }
                None => self
                    .synthesizer
                    .synthesize(&self.sea_state, time_s, &mut self.rng),
            };

            sink.write_frame(frame, &self.recording.frame_path(frame), &field)?;

            if let Some((lo, hi)) = field.elevation_bounds() {
                debug!(
                    "Frame {:03} t={:.1}s elevation [{:.3}, {:.3}] m",
                    frame, time_s, lo, hi
                );
            }
        }

        Ok(RunSummary {
            frames_written: self.recording.num_frames,
            output_dir,
        })
    }
}
