//! Record-to-sheet transformation
//!
//! Turns one [`ExportData`](crate::domain::ExportData) snapshot into the
//! worksheets of the export:
//!
//! - [`format`] - Date, currency and days-remaining formatters
//! - [`lookup`] - Join indexes with the `Unknown` fallback
//! - [`grid`] - Typed cells, grids and sheet names
//! - [`sheets`] - One builder per worksheet
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use clinic_export::core::transform::{build_all, SheetName};
//! use clinic_export::domain::ExportData;
//!
//! let sheets = build_all(&ExportData::default(), Utc::now());
//! assert_eq!(sheets.len(), 7);
//! assert_eq!(sheets[0].name, SheetName::SummaryDashboard);
//! ```

pub mod format;
pub mod grid;
pub mod lookup;
pub mod sheets;

pub use format::{days_remaining, format_currency, format_date};
pub use grid::{display_id, Cell, Grid, SheetName};
pub use lookup::{ClaimCounts, MemberIndex, UNKNOWN};
pub use sheets::{build_all, Sheet};
