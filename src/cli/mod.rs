//! CLI module for the ocean-notes application
//!
//! This module handles the command-line interface for interacting with the
//! notes store.

mod app;

pub use app::App;

use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(
    author,
    version,
    about = "Ocean Notes - a personal notes manager with pins, tags, archive, and trash"
)]
pub struct Cli {
    /// Path to the data directory holding persisted state
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the ocean-notes application
    #[clap(subcommand)]
    pub command: Commands,
}
