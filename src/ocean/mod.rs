//! Ocean surface synthesis: linear cosine waves superposed on a regular grid.

mod grid;
mod synthesizer;
mod wave;

// Re-export public types
pub use grid::Grid;
pub use synthesizer::{draw_short_waves, WaveField, WaveFieldSynthesizer};
pub use wave::WaveComponent;
