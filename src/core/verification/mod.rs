//! Export verification
//!
//! Per-sheet content fingerprints reported with every export, and a
//! read-back check of the delivered workbook.

pub mod checksum;
pub mod verify;

pub use checksum::{calculate_checksum_bytes, grid_fingerprint};
pub use verify::verify_artifact;
