//! Error types for wave map generation and export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaveMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image export error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WaveMapError>;
