//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PHP Syntax Diff - apply only semantically meaningful changes between
/// source trees
#[derive(Parser, Debug)]
#[command(name = "phpsd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Make SRC match DST's semantic content
    ///
    /// Files whose differences are purely cosmetic (quoting, array
    /// syntax, interpolation vs concatenation, grouping) keep their exact
    /// bytes; everything else is patched in place.
    ///
    /// Examples:
    ///   phpsd sync ./pristine ./generated
    ///   phpsd sync ./pristine ./generated --dry-run
    Sync {
        /// Directory to mutate
        src: PathBuf,

        /// Directory providing the desired semantic content
        dst: PathBuf,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical rendering of PHP files
    ShowCanonical {
        /// Files, or directories searched recursively for .php files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
