//! Content checksums for built sheets and the written artifact
//!
//! Sheet fingerprints hash the grid's cells rather than the XLSX bytes, so two
//! runs over the same data compare equal even though the workbook container
//! (timestamps inside the zip) differs.

use crate::core::transform::Grid;
use crate::domain::{ClinicError, Result};
use sha2::{Digest, Sha256};

/// SHA-256 of a grid's canonical JSON rendering
///
/// Grids serialize with fixed field order and tagged cells, so the rendering
/// is stable for equal content.
///
/// # Examples
///
/// ```
/// use clinic_export::core::transform::{Cell, Grid};
/// use clinic_export::core::verification::checksum::grid_fingerprint;
///
/// let mut grid = Grid::new(&["Name"]);
/// grid.push(vec![Cell::text("Ana")]);
/// let fingerprint = grid_fingerprint(&grid).unwrap();
/// assert_eq!(fingerprint.len(), 64);
/// ```
pub fn grid_fingerprint(grid: &Grid) -> Result<String> {
    let rendered =
        serde_json::to_string(grid).map_err(|e| ClinicError::Serialization(e.to_string()))?;
    Ok(calculate_checksum_bytes(rendered.as_bytes()))
}

/// SHA-256 of raw bytes, hex encoded
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}
