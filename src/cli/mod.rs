//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Track installed application versions and check GitHub for newer releases
#[derive(Parser, Debug)]
#[command(name = "shouldupdate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file path (default: ~/.config/shouldupdate/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Version file path (default: ~/.config/shouldupdate/versions.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Release API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Effective output format: `--plain` wins over `--output-format`.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }
        self.output_format.unwrap_or_default()
    }

    /// Whether colored output should be forced on, forced off, or left to
    /// terminal detection (`None`).
    #[must_use]
    pub fn color_override(&self) -> Option<bool> {
        let format = self.output_format();
        if !format.use_colors() || self.color == Some(ColorMode::Never) {
            return Some(false);
        }
        (self.color == Some(ColorMode::Always)).then_some(true)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track an application, or update its recorded version
    Add(commands::add::AddArgs),

    /// Stop tracking an application
    Remove(commands::remove::RemoveArgs),

    /// List tracked applications
    List(commands::list::ListArgs),

    /// Check tracked applications for newer releases
    Check(commands::check::CheckArgs),
}
