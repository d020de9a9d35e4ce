//! Post-delivery verification of the written workbook

use super::checksum::calculate_checksum_bytes;
use crate::domain::{ClinicError, Result};
use std::path::Path;

/// Re-read `path` and check it hashes to `expected`
///
/// # Errors
///
/// Returns [`ClinicError::Delivery`] if the file can't be read back or its
/// contents differ from what was written.
pub async fn verify_artifact(path: &Path, expected: &str) -> Result<()> {
    let written = tokio::fs::read(path).await.map_err(|e| {
        ClinicError::Delivery(format!("Failed to read back {}: {e}", path.display()))
    })?;

    let actual = calculate_checksum_bytes(&written);
    if actual != expected {
        return Err(ClinicError::Delivery(format!(
            "Checksum mismatch for {}: expected {expected}, found {actual}",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), checksum = %actual, "Artifact verified");
    Ok(())
}
