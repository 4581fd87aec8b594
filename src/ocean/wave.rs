//! Single linear wave component with deep-water dispersion.

use glam::DVec2;
use std::f64::consts::TAU;

/// One cosine wave: amplitude, wavelength and propagation heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    pub amplitude_m: f64,
    pub wavelength_m: f64,
    pub direction_rad: f64,
}

impl WaveComponent {
    pub fn new(amplitude_m: f64, wavelength_m: f64, direction_rad: f64) -> Self {
        Self {
            amplitude_m,
            wavelength_m,
            direction_rad,
        }
    }

    /// Wavenumber k = 2π / λ (rad/m)
    pub fn wavenumber(&self) -> f64 {
        TAU / self.wavelength_m
    }

    /// Angular frequency ω = sqrt(g·k) (rad/s)
    ///
    /// Non-finite for a zero or negative wavelength.
    pub fn angular_frequency(&self, gravity: f64) -> f64 {
        (gravity * self.wavenumber()).sqrt()
    }

    /// Unit propagation vector (cos θ, sin θ)
    pub fn heading(&self) -> DVec2 {
        DVec2::from_angle(self.direction_rad)
    }

    /// Elevation at (x, y) and time t
    pub fn elevation(&self, x: f64, y: f64, time_s: f64, gravity: f64) -> f64 {
        WavePhase::new(self, gravity, time_s).elevation(x, y)
    }
}

/// Per-call constants of a component, hoisted out of the grid loop
#[derive(Debug, Clone, Copy)]
pub(crate) struct WavePhase {
    amplitude: f64,
    k: f64,
    heading: DVec2,
    time_offset: f64,
}

impl WavePhase {
    pub(crate) fn new(wave: &WaveComponent, gravity: f64, time_s: f64) -> Self {
        let k = wave.wavenumber();
        let omega = wave.angular_frequency(gravity);
        Self {
            amplitude: wave.amplitude_m,
            k,
            heading: wave.heading(),
            time_offset: omega * time_s,
        }
    }

    /// A · cos(k·(cos θ·x + sin θ·y) − ω·t)
    #[inline]
    pub(crate) fn elevation(&self, x: f64, y: f64) -> f64 {
        let along = self.heading.dot(DVec2::new(x, y));
        self.amplitude * (self.k * along - self.time_offset).cos()
    }
}
