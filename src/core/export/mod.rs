//! Export orchestration
//!
//! - [`fetcher`] - Concurrent read of all collections into a snapshot
//! - [`workbook`] - XLSX assembly and the artifact filename
//! - [`coordinator`] - State machine, re-entrancy guard and delivery
//! - [`summary`] - Report and failure types returned to callers

pub mod coordinator;
pub mod fetcher;
pub mod state;
pub mod summary;
pub mod workbook;

pub use coordinator::ExportCoordinator;
pub use fetcher::RecordFetcher;
pub use state::ExportState;
pub use summary::{ExportFailure, ExportReport, SheetReport};
pub use workbook::{assemble_workbook, export_filename, AssembledWorkbook};
