//! Export report and failure types
//!
//! [`ExportReport`] is what a successful run hands back to its caller.
//! [`ExportFailure`] is deliberately coarse: the caller only learns which
//! stage failed, while the underlying cause goes to the log.

use crate::core::transform::SheetName;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Row count and content fingerprint of one delivered sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub name: SheetName,
    pub rows: usize,
    /// SHA-256 of the sheet's cells
    pub fingerprint: String,
}

/// Result of a successful export
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Artifact name, `hilome-data-export-YYYY-MM-DD.xlsx`
    pub filename: String,

    /// Where the artifact was written
    pub path: PathBuf,

    /// Per-sheet row counts and fingerprints, in workbook order
    pub sheets: Vec<SheetReport>,

    /// Referral rewards read from the store; fetched for completeness but not
    /// rendered in any sheet
    pub referral_rewards: usize,

    /// SHA-256 of the written workbook bytes
    pub artifact_checksum: String,

    /// Size of the written workbook
    pub bytes_written: usize,

    /// The instant every time-dependent value in this run was computed from
    pub generated_at: DateTime<Utc>,

    /// Wall-clock time of the whole run
    pub duration: Duration,
}

impl ExportReport {
    /// Data rows in `sheet`
    pub fn row_count(&self, sheet: SheetName) -> Option<usize> {
        self.sheets.iter().find(|s| s.name == sheet).map(|s| s.rows)
    }

    /// Fingerprint of `sheet`
    pub fn fingerprint(&self, sheet: SheetName) -> Option<&str> {
        self.sheets
            .iter()
            .find(|s| s.name == sheet)
            .map(|s| s.fingerprint.as_str())
    }

    /// Log the report
    pub fn log_summary(&self) {
        tracing::info!(
            filename = %self.filename,
            path = %self.path.display(),
            bytes = self.bytes_written,
            referral_rewards = self.referral_rewards,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );

        for sheet in &self.sheets {
            tracing::debug!(
                sheet = %sheet.name,
                rows = sheet.rows,
                fingerprint = %sheet.fingerprint,
                "Sheet delivered"
            );
        }
    }
}

/// Why an export did not produce an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportFailure {
    /// Another export is running; nothing was started
    #[error("An export is already in progress")]
    AlreadyRunning,

    /// Reading from the store failed
    #[error("Failed to fetch export data")]
    Fetch,

    /// Sheets or the workbook could not be built
    #[error("Failed to build export workbook")]
    Build,

    /// The workbook could not be written
    #[error("Failed to save export file")]
    Delivery,
}

impl ExportFailure {
    /// Message shown to the operator
    pub fn user_message(&self) -> &'static str {
        match self {
            ExportFailure::AlreadyRunning => {
                "An export is already in progress. Please wait for it to finish."
            }
            ExportFailure::Fetch | ExportFailure::Build => {
                "Failed to export data. Please try again or contact support."
            }
            ExportFailure::Delivery => "Failed to save the export file. Please try again.",
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportFailure::AlreadyRunning => 3,
            ExportFailure::Fetch => 4,
            ExportFailure::Build | ExportFailure::Delivery => 5,
        }
    }
}
