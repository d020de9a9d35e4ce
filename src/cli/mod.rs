//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Clinic Export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Clinic Export - spreadsheet export of clinic records
#[derive(Parser, Debug)]
#[command(name = "clinic-export")]
#[command(version, about, long_about = None)]
#[command(author = "Clinic Export Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "clinic-export.toml",
        env = "CLINIC_EXPORT_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINIC_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all clinic records to an XLSX workbook
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Send the confirmation emails for a booking
    NotifyBooking(commands::notify::NotifyArgs),
}
