//! Superposition of a dominant swell and randomized short waves.

use ndarray::{Array2, Zip};
use rand::Rng;

use super::grid::Grid;
use super::wave::{WaveComponent, WavePhase};
use crate::params::SeaState;

/// Sampled sea surface at one instant
#[derive(Debug, Clone)]
pub struct WaveField {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub elevation: Array2<f64>,
    pub time_s: f64,
}

impl WaveField {
    /// (rows, cols) of every array
    pub fn dim(&self) -> (usize, usize) {
        self.elevation.dim()
    }

    /// Smallest and largest finite elevation, None if nothing is finite
    pub fn elevation_bounds(&self) -> Option<(f64, f64)> {
        self.elevation
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Evaluates sea states on a fixed grid
///
/// The synthesizer owns no RNG; callers pass one in so runs can be seeded.
#[derive(Debug, Clone, Default)]
pub struct WaveFieldSynthesizer;

impl WaveFieldSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Draw a fresh short-wave set and synthesize the surface at `time_s`
    ///
    /// Consumes `2 * num_short_waves` uniform draws from `rng`.
    pub fn synthesize<R: Rng>(
        &self,
        state: &SeaState,
        time_s: f64,
        rng: &mut R,
    ) -> WaveField {
        let short_waves = draw_short_waves(state, rng);
        self.synthesize_with(state, &short_waves, time_s)
    }

    /// Synthesize the surface from an explicit short-wave set
    ///
    /// `state.num_short_waves` is ignored in favour of `short_waves`.
    pub fn synthesize_with(
        &self,
        state: &SeaState,
        short_waves: &[WaveComponent],
        time_s: f64,
    ) -> WaveField {
        let grid = Grid::new(state.length_m, state.width_m, state.grid_size);
        let gravity = state.gravity_m_per_s2;

        let main = WavePhase::new(&state.main_wave(), gravity, time_s);
        let mut elevation = Zip::from(&grid.x)
            .and(&grid.y)
            .map_collect(|&x, &y| main.elevation(x, y));

        // Short waves accumulate separately, then add onto the swell
        let mut chop = Array2::<f64>::zeros(grid.dim());
        for wave in short_waves {
            let phase = WavePhase::new(wave, gravity, time_s);
            Zip::from(&mut chop)
                .and(&grid.x)
                .and(&grid.y)
                .for_each(|eta, &x, &y| *eta += phase.elevation(x, y));
        }
        elevation += &chop;

        WaveField {
            x: grid.x,
            y: grid.y,
            elevation,
            time_s,
        }
    }
}

/// Draw short-wave parameters: all wavelengths first, then all directions
pub fn draw_short_waves<R: Rng>(state: &SeaState, rng: &mut R) -> Vec<WaveComponent> {
    let count = state.num_short_waves;
    let wavelengths: Vec<f64> = (0..count)
        .map(|_| sample_uniform(rng, state.short_wavelength_range_m))
        .collect();
    let directions: Vec<f64> = (0..count)
        .map(|_| sample_uniform(rng, state.short_direction_range_rad))
        .collect();

    wavelengths
        .into_iter()
        .zip(directions)
        .map(|(wavelength, direction)| {
            WaveComponent::new(state.short_amplitude_m, wavelength, direction)
        })
        .collect()
}

/// Uniform sample in [lo, hi), or `lo` for an empty range
fn sample_uniform<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
