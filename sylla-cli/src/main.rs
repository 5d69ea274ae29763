//! Sylla command-line entry point

use clap::Parser;
use sylla_cli::commands::Commands;

/// Split words into syllables using dictionaries and hyphenation patterns
#[derive(Parser, Debug)]
#[command(name = "sylla", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
