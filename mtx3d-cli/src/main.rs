//! mtx3d - print the transform chain for a frame config
//!
//! Usage:
//!   mtx3d [--config frame.toml] [--frames N] [--spin-degrees DEG] [--no-color]
//!
//! Set RUST_LOG=debug to see config loading and validation messages.
use clap::Parser;
use log::error;
use mtx3d_cli::{Cli, FrameApp};
use std::io::stdout;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = FrameApp::from_cli(&cli).and_then(|app| app.run(&mut stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // env_logger prints errors without RUST_LOG set
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
