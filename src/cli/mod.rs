//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Quire using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for unreadable or invalid input
pub const EXIT_INPUT_ERROR: i32 = 3;

/// Exit code for everything else
pub const EXIT_FATAL: i32 = 5;

/// Quire - Dashboard widget data exporter
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(version, about, long_about = None)]
#[command(author = "Quire Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "quire.toml", env = "QUIRE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "QUIRE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a dashboard as a summary sheet plus one sheet per widget
    ExportDashboard(commands::export::ExportArgs),

    /// Export a single widget as one detailed sheet
    ExportWidget(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
