//! Main entry point for the tipper CLI

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use cgmath::{Deg, Vector3};
use clap::Parser;

use tipper::gfx::transform::Axis;
use tipper::{AppConfig, TipperApp};

#[derive(Parser)]
#[command(name = "tipper")]
#[command(about = "Assemble the dump-truck rig and animate the container lift", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory with the part OBJ files (procedural boxes when omitted)
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Number of animation steps (at least 2)
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Vertical lift of the container
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    lift: f64,

    /// Rotation axis of the lift (x, y or z)
    #[arg(long, default_value = "z")]
    axis: Axis,

    /// Total rotation in degrees
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    angle: f64,

    /// Pause between animation frames in milliseconds
    #[arg(long, default_value_t = 50)]
    frame_delay_ms: u64,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG still overrides the verbosity flags
    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = AppConfig::new()
        .with_steps(cli.steps)
        .with_lift(Vector3::new(0.0, 0.0, cli.lift))
        .with_rotation(cli.axis, Deg(cli.angle))
        .with_frame_delay(Duration::from_millis(cli.frame_delay_ms));
    if let Some(dir) = cli.assets {
        config = config.with_asset_dir(dir);
    }

    let frames = TipperApp::new(config).run()?;
    log::info!("Done: {} frames", frames);
    Ok(())
}
