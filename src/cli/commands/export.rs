//! Export command implementation
//!
//! This module implements the `export` command, which writes every clinic
//! collection to a dated XLSX workbook.

use crate::config::load_config;
use crate::core::export::{ExportCoordinator, ExportReport};
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override the directory the workbook is written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Print per-sheet row counts and fingerprints after exporting
    #[arg(long)]
    pub details: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(2);
            }
        };

        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.export.output_dir = dir.clone();
        }

        let coordinator = match ExportCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(2);
            }
        };

        println!("Generating export file...");

        match coordinator.trigger_export().await {
            Ok(report) => {
                println!("Export completed successfully! Saved: {}", report.path.display());
                if self.details {
                    print_details(&report);
                }
                Ok(0)
            }
            Err(failure) => {
                eprintln!("{}", failure.user_message());
                Ok(failure.exit_code())
            }
        }
    }
}

fn print_details(report: &ExportReport) {
    println!();
    println!("  {:<20} {:>6}  Fingerprint", "Sheet", "Rows");
    for sheet in &report.sheets {
        println!(
            "  {:<20} {:>6}  {}",
            sheet.name.title(),
            sheet.rows,
            &sheet.fingerprint[..12.min(sheet.fingerprint.len())]
        );
    }
    println!();
    println!("  Referral rewards read: {}", report.referral_rewards);
    println!("  Workbook SHA-256: {}", report.artifact_checksum);
    println!("  Duration: {:.2}s", report.duration.as_secs_f64());
}
