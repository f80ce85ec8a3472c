//! PHP Syntax Diff CLI
//!
//! The command-line interface for semantically synchronizing PHP source
//! trees and inspecting canonical renderings.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sync {
            src,
            dst,
            dry_run,
            json,
        } => commands::run_sync(&src, &dst, dry_run, json),
        Commands::ShowCanonical { paths } => commands::run_show_canonical(&paths),
    }
}
