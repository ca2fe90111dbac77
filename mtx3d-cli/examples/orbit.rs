//! Example: spin the default quad for a few frames and print each chain
//!
//! Usage: cargo run --example orbit -- [path/to/frame.toml]
use mtx3d_cli::{CliError, FrameApp};
use mtx3d_core::FrameConfig;
use std::env;
use std::io::stdout;

fn main() -> Result<(), CliError> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => FrameConfig::load(path)?,
        None => FrameConfig::default(),
    };

    // Eight frames of 45 degrees completes one full turn
    let app = FrameApp::new(config)
        .with_color(true)
        .with_animation(8, 45.0);
    app.run(&mut stdout().lock())
}
