//! Wavemap - ocean surface frames for animation
//!
//! A dominant swell and a handful of short random waves, superposed on a
//! regular grid and rendered one heatmap per time step.

use clap::Parser;
use log::info;
use std::time::Instant;

use wavemap::animation::FrameDriver;
use wavemap::cli::Args;
use wavemap::rendering::PngFrameWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.build_config()?;

    println!("Wavemap - synthetic ocean surface frames");
    println!(
        "  Grid: {}x{} samples over {}m x {}m",
        config.sea_state.grid_size,
        config.sea_state.grid_size,
        config.sea_state.length_m,
        config.sea_state.width_m
    );
    println!("  Short waves: {}", config.sea_state.num_short_waves);
    match config.recording.seed {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: random"),
    }

    let start = Instant::now();

    let mut writer = PngFrameWriter::new(config.render);
    let mut driver = FrameDriver::from_config(config.sea_state, config.recording);
    let summary = driver.run(&mut writer)?;

    info!(
        "{} frames in {:.2}s",
        summary.frames_written,
        start.elapsed().as_secs_f64()
    );
    println!(
        "Frames saved in the directory '{}'.",
        summary.output_dir.display()
    );

    Ok(())
}
