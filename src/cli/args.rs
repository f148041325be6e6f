//! CLI argument definitions
//!
//! All Clap derive structs for `ghostwake` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Wake the ghost: link, three nodes, reveal.
#[derive(Parser, Debug)]
#[command(name = "ghostwake", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "GHOSTWAKE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,

    /// Path to YAML configuration file.
    #[arg(short, long, global = true, env = "GHOSTWAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding persisted progress (overrides configuration).
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session on the terminal.
    Play(PlayArgs),

    /// Show the persisted progress.
    Status(StatusArgs),

    /// Erase the persisted progress.
    Reset(ResetArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `play`.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Delay before the link auto-advances (e.g. `1200ms`).
    #[arg(long, value_parser = humantime::parse_duration)]
    pub link_delay: Option<std::time::Duration>,

    /// Flourish between the final node and the reveal (e.g. `1200ms`).
    #[arg(long, value_parser = humantime::parse_duration)]
    pub reveal_delay: Option<std::time::Duration>,

    /// Use the short reveal flourish.
    #[arg(long)]
    pub reduced_motion: bool,

    /// Keep progress in memory only.
    #[arg(long)]
    pub ephemeral: bool,

    /// Write structured JSONL events to this file.
    #[arg(long)]
    pub events: Option<PathBuf>,
}

/// Arguments for `status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `reset`.
#[derive(Args, Debug)]
pub struct ResetArgs {}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for informational commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}
