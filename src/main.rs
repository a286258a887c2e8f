//! Learnly - the course landing screen, in your terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use learnly_core::logging;

/// Learnly - an interactive course landing screen for the terminal
#[derive(Parser, Debug)]
#[command(name = "learnly")]
#[command(version, about = "An interactive course landing screen for the terminal", long_about = None)]
struct Args {
    /// Frame-rate cap for the animation tick, in frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u16).range(1..=240))]
    fps: u16,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    learnly_tui::run(args.fps)?;
    Ok(())
}
