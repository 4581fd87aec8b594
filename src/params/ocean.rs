//! Sea state parameters: grid extent, dominant swell and short-wave chop.

use serde::Deserialize;
use std::f64::consts::PI;

use crate::error::{Result, WaveMapError};
use crate::ocean::WaveComponent;

/// Standard gravity used by the deep-water dispersion relation (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Ocean surface parameters for one synthesis call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeaState {
    /// Grid extent along X (meters, same units as wavelength)
    pub length_m: f64,

    /// Grid extent along Y (meters)
    pub width_m: f64,

    /// Samples per axis. Physical spacing scales with the extent.
    pub grid_size: usize,

    /// Dominant wave height (meters, sign flips the phase)
    pub main_amplitude_m: f64,

    /// Dominant wavelength (meters, must be > 0 for a finite field)
    pub main_wavelength_m: f64,

    /// Dominant propagation direction (radians, counter-clockwise from +X)
    pub main_direction_rad: f64,

    /// Number of randomized short waves superposed on the dominant wave
    pub num_short_waves: usize,

    /// Shared amplitude of every short wave (meters)
    pub short_amplitude_m: f64,

    /// Uniform draw range for short-wave wavelengths (meters, half-open)
    pub short_wavelength_range_m: (f64, f64),

    /// Uniform draw range for short-wave directions (radians, half-open)
    pub short_direction_range_rad: (f64, f64),

    /// Gravitational acceleration (m/s²)
    pub gravity_m_per_s2: f64,
}

impl Default for SeaState {
    fn default() -> Self {
        Self {
            length_m: 150.0,
            width_m: 150.0,
            grid_size: 100,
            main_amplitude_m: 2.1,
            main_wavelength_m: 20.0,
            main_direction_rad: PI / 4.0,
            num_short_waves: 5,
            short_amplitude_m: 0.11,
            short_wavelength_range_m: (10.0, 20.0),
            short_direction_range_rad: (0.0, PI),
            gravity_m_per_s2: STANDARD_GRAVITY,
        }
    }
}

impl SeaState {
    /// Dominant wave as a component
    pub fn main_wave(&self) -> WaveComponent {
        WaveComponent::new(
            self.main_amplitude_m,
            self.main_wavelength_m,
            self.main_direction_rad,
        )
    }

    /// Validate structural parameters.
    ///
    /// A non-positive main wavelength is accepted on purpose: it yields a
    /// non-finite field rather than an error.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 2 {
            return Err(WaveMapError::InvalidConfig(format!(
                "grid size must be at least 2, got {}",
                self.grid_size
            )));
        }
        for (name, extent) in [("length", self.length_m), ("width", self.width_m)] {
            if !(extent.is_finite() && extent > 0.0) {
                return Err(WaveMapError::InvalidConfig(format!(
                    "{} must be positive and finite, got {}",
                    name, extent
                )));
            }
        }

        let (min_wl, max_wl) = self.short_wavelength_range_m;
        if !(min_wl > 0.0 && min_wl <= max_wl && max_wl.is_finite()) {
            return Err(WaveMapError::InvalidConfig(format!(
                "short wavelength range must satisfy 0 < min <= max, got ({}, {})",
                min_wl, max_wl
            )));
        }

        let (min_dir, max_dir) = self.short_direction_range_rad;
        if !(min_dir <= max_dir && min_dir.is_finite() && max_dir.is_finite()) {
            return Err(WaveMapError::InvalidConfig(format!(
                "short direction range must satisfy min <= max, got ({}, {})",
                min_dir, max_dir
            )));
        }

        Ok(())
    }
}

/// How short-wave parameters evolve across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ShortWaveMode {
    /// Draw a fresh short-wave set for every frame
    #[default]
    RedrawEachFrame,

    /// Draw once at the start of the run and reuse for every frame
    FixedPerRun,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_recorded_run() {
        let state = SeaState::default();
        assert_eq!(state.grid_size, 100);
        assert_eq!(state.length_m, 150.0);
        assert_eq!(state.num_short_waves, 5);
        assert!((state.main_direction_rad - PI / 4.0).abs() < 1e-12);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_grid() {
        let state = SeaState {
            grid_size: 1,
            ..Default::default()
        };
        assert!(matches!(
            state.validate(),
            Err(WaveMapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_short_wave_ranges() {
        let inverted = SeaState {
            short_wavelength_range_m: (20.0, 10.0),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let zero = SeaState {
            short_wavelength_range_m: (0.0, 10.0),
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let directions = SeaState {
            short_direction_range_rad: (1.0, 0.0),
            ..Default::default()
        };
        assert!(directions.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_degenerate_main_wavelength() {
        let state = SeaState {
            main_wavelength_m: 0.0,
            ..Default::default()
        };
        assert!(state.validate().is_ok());
    }
}
