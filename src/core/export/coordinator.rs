//! Export coordinator - runs one export end to end
//!
//! Fetch → build → assemble → deliver, publishing each stage on a watch
//! channel. Only one export runs at a time; a trigger that arrives while a run
//! is in progress is rejected immediately rather than queued.

use super::fetcher::RecordFetcher;
use super::state::ExportState;
use super::summary::{ExportFailure, ExportReport, SheetReport};
use super::workbook::{assemble_workbook, AssembledWorkbook};
use crate::adapters::store::{PostgrestStore, RecordStore};
use crate::config::ClinicExportConfig;
use crate::core::transform::build_all;
use crate::core::verification::{calculate_checksum_bytes, grid_fingerprint, verify_artifact};
use crate::domain::{ClinicError, Result};
use crate::log_stage;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Export coordinator
pub struct ExportCoordinator {
    fetcher: RecordFetcher,
    output_dir: PathBuf,
    state: watch::Sender<ExportState>,
}

/// Returns the coordinator to `Idle` when a run ends, however it ends
struct IdleOnDrop<'a> {
    state: &'a watch::Sender<ExportState>,
}

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.state.send_replace(ExportState::Idle);
        log_stage!(ExportState::Idle);
    }
}

impl ExportCoordinator {
    /// Create a coordinator reading from `store` and writing into `output_dir`
    pub fn new(store: Arc<dyn RecordStore>, output_dir: impl Into<PathBuf>) -> Self {
        let (state, _) = watch::channel(ExportState::Idle);
        Self {
            fetcher: RecordFetcher::new(store),
            output_dir: output_dir.into(),
            state,
        }
    }

    /// Create a coordinator backed by the configured PostgREST store
    ///
    /// # Errors
    ///
    /// Returns an error if the store client can't be created.
    pub fn from_config(config: &ClinicExportConfig) -> Result<Self> {
        let store = PostgrestStore::new(config.store.clone())?;
        Ok(Self::new(Arc::new(store), &config.export.output_dir))
    }

    /// Watch the coordinator's state
    pub fn subscribe(&self) -> watch::Receiver<ExportState> {
        self.state.subscribe()
    }

    /// Current state
    pub fn state(&self) -> ExportState {
        *self.state.borrow()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run one export
    ///
    /// All time-dependent values (generation date, days remaining, filename)
    /// derive from a single instant taken at the start of the run.
    ///
    /// # Errors
    ///
    /// - [`ExportFailure::AlreadyRunning`] if an export is in progress; returned
    ///   before any work starts
    /// - [`ExportFailure::Fetch`], [`ExportFailure::Build`] or
    ///   [`ExportFailure::Delivery`] for the stage that failed; no artifact is
    ///   left behind for fetch or build failures
    pub async fn trigger_export(&self) -> std::result::Result<ExportReport, ExportFailure> {
        if !self.try_begin() {
            tracing::warn!(state = %self.state(), "Export already in progress, trigger rejected");
            return Err(ExportFailure::AlreadyRunning);
        }
        let _idle = IdleOnDrop { state: &self.state };

        let started = Instant::now();
        let generated_at = Utc::now();
        tracing::info!(generated_at = %generated_at, "Starting export");

        let report = self.run(generated_at, started).await?;
        report.log_summary();
        Ok(report)
    }

    /// Atomically move `Idle → Fetching`
    fn try_begin(&self) -> bool {
        let started = self.state.send_if_modified(|state| {
            if state.is_idle() {
                *state = ExportState::Fetching;
                true
            } else {
                false
            }
        });
        if started {
            log_stage!(ExportState::Fetching);
        }
        started
    }

    fn transition(&self, next: ExportState) {
        self.state.send_replace(next);
        log_stage!(next);
    }

    fn fail(&self, failure: ExportFailure, cause: &ClinicError) -> ExportFailure {
        self.transition(ExportState::Failed);
        tracing::error!(stage = ?failure, error = %cause, "Export failed");
        failure
    }

    async fn run(
        &self,
        generated_at: DateTime<Utc>,
        started: Instant,
    ) -> std::result::Result<ExportReport, ExportFailure> {
        let data = self
            .fetcher
            .fetch_all()
            .await
            .map_err(|e| self.fail(ExportFailure::Fetch, &e))?;

        self.transition(ExportState::Building);
        let sheets = build_all(&data, generated_at);
        let sheet_reports = sheets
            .iter()
            .map(|sheet| -> Result<SheetReport> {
                Ok(SheetReport {
                    name: sheet.name,
                    rows: sheet.grid.row_count(),
                    fingerprint: grid_fingerprint(&sheet.grid)?,
                })
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| self.fail(ExportFailure::Build, &e))?;
        let workbook = assemble_workbook(&sheets, generated_at)
            .map_err(|e| self.fail(ExportFailure::Build, &e))?;

        self.transition(ExportState::Delivering);
        let artifact_checksum = calculate_checksum_bytes(&workbook.bytes);
        let path = self
            .deliver(&workbook, &artifact_checksum)
            .await
            .map_err(|e| self.fail(ExportFailure::Delivery, &e))?;

        Ok(ExportReport {
            filename: workbook.filename,
            path,
            sheets: sheet_reports,
            referral_rewards: data.referral_rewards.len(),
            artifact_checksum,
            bytes_written: workbook.bytes.len(),
            generated_at,
            duration: started.elapsed(),
        })
    }

    /// Write the workbook into the output directory and read it back
    ///
    /// The bytes are staged under `<filename>.tmp` and only renamed to the
    /// final name once the read-back checksum matches. On any failure the
    /// staging file is removed.
    async fn deliver(&self, workbook: &AssembledWorkbook, checksum: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                ClinicError::Delivery(format!(
                    "Failed to create output directory {}: {e}",
                    self.output_dir.display()
                ))
            })?;

        let path = self.output_dir.join(&workbook.filename);
        let staging = self.output_dir.join(format!("{}.tmp", workbook.filename));

        if let Err(e) = publish(&staging, &path, &workbook.bytes, checksum).await {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %staging.display(),
                        error = %cleanup,
                        "Failed to remove staging file"
                    );
                }
            }
            return Err(e);
        }

        Ok(path)
    }
}

async fn publish(staging: &Path, path: &Path, bytes: &[u8], checksum: &str) -> Result<()> {
    tokio::fs::write(staging, bytes).await.map_err(|e| {
        ClinicError::Delivery(format!("Failed to write {}: {e}", staging.display()))
    })?;

    verify_artifact(staging, checksum).await?;

    tokio::fs::rename(staging, path).await.map_err(|e| {
        ClinicError::Delivery(format!(
            "Failed to move {} to {}: {e}",
            staging.display(),
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::Collection;
    use crate::core::export::workbook::export_filename;
    use crate::core::transform::SheetName;
    use crate::domain::StoreError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    struct StaticStore {
        fail: bool,
    }

    #[async_trait]
    impl RecordStore for StaticStore {
        async fn fetch_collection(&self, collection: Collection) -> Result<Vec<Value>> {
            if self.fail {
                return Err(StoreError::Timeout(collection.to_string()).into());
            }
            Ok(match collection {
                Collection::Bookings => vec![
                    json!({"id": "b1", "name": "Ana", "email": "a@x.com", "status": "pending"}),
                    json!({"id": "b2", "name": "Ben", "email": "b@x.com", "status": "completed"}),
                ],
                _ => Vec::new(),
            })
        }

        fn base_url(&self) -> &str {
            "memory://"
        }
    }

    #[tokio::test]
    async fn test_successful_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("nested").join("exports");
        let coordinator = ExportCoordinator::new(Arc::new(StaticStore { fail: false }), &output_dir);

        let report = coordinator.trigger_export().await.unwrap();

        assert!(report.filename.starts_with("hilome-data-export-"));
        assert_eq!(report.path, output_dir.join(&report.filename));
        assert!(report.path.exists());
        assert_eq!(report.sheets.len(), 7);
        assert_eq!(report.row_count(SheetName::Bookings), Some(2));
        assert_eq!(report.row_count(SheetName::Transactions), Some(0));
        assert_eq!(coordinator.state(), ExportState::Idle);
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_no_artifact() {
        let dir = TempDir::new().unwrap();
        let coordinator = ExportCoordinator::new(Arc::new(StaticStore { fail: true }), dir.path());
        let mut states = coordinator.subscribe();

        let err = coordinator.trigger_export().await.unwrap_err();

        assert_eq!(err, ExportFailure::Fetch);
        assert_eq!(coordinator.state(), ExportState::Idle);
        assert!(states.has_changed().unwrap());
        assert_eq!(*states.borrow_and_update(), ExportState::Idle);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_unwritable_output_is_delivery_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("exports");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let coordinator = ExportCoordinator::new(Arc::new(StaticStore { fail: false }), &blocker);
        let err = coordinator.trigger_export().await.unwrap_err();

        assert_eq!(err, ExportFailure::Delivery);
        assert_eq!(coordinator.state(), ExportState::Idle);
    }

    #[tokio::test]
    async fn test_failed_publish_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let coordinator = ExportCoordinator::new(Arc::new(StaticStore { fail: false }), dir.path());
        // A directory at the final name makes the rename fail
        let target = dir.path().join(export_filename(Utc::now()));
        std::fs::create_dir(&target).unwrap();

        let err = coordinator.trigger_export().await.unwrap_err();

        assert_eq!(err, ExportFailure::Delivery);
        assert!(target.is_dir());
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![target.file_name().unwrap().to_owned()]);
    }

    #[tokio::test]
    async fn test_successful_export_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let coordinator = ExportCoordinator::new(Arc::new(StaticStore { fail: false }), dir.path());

        let report = coordinator.trigger_export().await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![report.filename]);
    }

    #[tokio::test]
    async fn test_trigger_rejected_while_running() {
        let dir = TempDir::new().unwrap();
        let coordinator = ExportCoordinator::new(Arc::new(StaticStore { fail: false }), dir.path());

        assert!(coordinator.try_begin());
        assert_eq!(
            coordinator.trigger_export().await.unwrap_err(),
            ExportFailure::AlreadyRunning
        );
        assert_eq!(coordinator.state(), ExportState::Fetching);
    }
}
