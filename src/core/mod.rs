//! Core export logic.
//!
//! # Modules
//!
//! - [`export`] - Fetching, workbook assembly and the export state machine
//! - [`transform`] - Formatters, join indexes and sheet builders
//! - [`verification`] - Sheet fingerprints and artifact read-back
//!
//! # Export Workflow
//!
//! 1. **Fetch**: Read all seven collections concurrently
//! 2. **Build**: Turn the snapshot into seven sheet grids
//! 3. **Assemble**: Serialize the grids as an XLSX workbook
//! 4. **Deliver**: Write the workbook to the output directory and verify it
//! 5. **Report**: Return the filename, row counts and fingerprints
//!
//! # Example
//!
//! ```rust,no_run
//! use clinic_export::config::load_config;
//! use clinic_export::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinic-export.toml")?;
//! let coordinator = ExportCoordinator::from_config(&config)?;
//!
//! match coordinator.trigger_export().await {
//!     Ok(report) => println!("Saved {}", report.filename),
//!     Err(failure) => eprintln!("{}", failure.user_message()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod transform;
pub mod verification;
