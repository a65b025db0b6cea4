//! ledbar CLI — drive or simulate the 16-LED RGBW bar.
//!
//! Commands run against an in-memory bus and print the wire frames they
//! would transmit plus the resulting LED levels; wire a real
//! `embedded-hal` I2C bus through the library to drive hardware.

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

mod cli;

/// Shared shutdown flag — set by Ctrl+C handler.
pub static RUNNING: AtomicBool = AtomicBool::new(true);

#[derive(Parser)]
#[command(
    name = "ledbar",
    version,
    about = "Pattern renderer for a 16-LED RGBW I2C bar"
)]
struct Args {
    /// Output as JSON (for config)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    ctrlc::set_handler(move || {
        RUNNING.store(false, Ordering::SeqCst);
    })
    .ok();

    if let Err(e) = cli::run(args.command, args.json) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
