//! Wavemap library - synthetic ocean surface heatmaps

pub mod animation;
pub mod cli;
pub mod error;
pub mod ocean;
pub mod params;
pub mod rendering;
