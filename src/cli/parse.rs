//! CLI parse: clap types for Rankly. No behavior; definitions only.

use crate::sort::Algorithm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rankly CLI - rank songs by answering which of two is better
#[derive(Parser)]
#[command(name = "rankly")]
#[command(about = "Rank songs by answering which of two is better")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where config/ is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start ranking songs from a playlist JSON file or a music directory
    Rank {
        /// Playlist file (JSON array of songs) or directory of audio files
        source: PathBuf,
        /// Sorting algorithm (binary, merge)
        #[arg(long)]
        algorithm: Option<Algorithm>,
        /// Save progress to this file
        #[arg(long, conflicts_with = "name")]
        save: Option<PathBuf>,
        /// Save progress as a named session instead of a file
        #[arg(long)]
        name: Option<String>,
    },
    /// Continue a saved ranking
    Resume {
        /// Save file to resume from (progress is saved back to it)
        #[arg(required_unless_present = "name", conflicts_with = "name")]
        file: Option<PathBuf>,
        /// Named session to resume
        #[arg(long)]
        name: Option<String>,
    },
    /// Describe a save file without resuming it
    Inspect {
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Manage named sessions
    Sessions {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// List saved sessions, most recent first
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show one saved session
    Show {
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Delete a saved session
    Remove { name: String },
}
