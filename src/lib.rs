// Clinic Export - Clinic records to XLSX export tool
// Copyright (c) 2025 Clinic Export Contributors
// Licensed under the MIT License

//! # Clinic Export - clinic records to XLSX
//!
//! Reads every operational collection of the clinic (bookings, members,
//! patient records, transactions, membership benefits, benefit claims and
//! referral rewards) from the backend store and writes a single seven-sheet
//! workbook for offline reporting.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export pipeline (fetch, transform, assemble, deliver)
//! - [`adapters`] - External integrations (record store, email notifier)
//! - [`domain`] - Record schemas, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic_export::config::load_config;
//! use clinic_export::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("clinic-export.toml")?;
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!
//!     let report = coordinator.trigger_export().await?;
//!     println!("Wrote {}", report.path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Observing progress
//!
//! The coordinator publishes its state (`idle`, `fetching`, `building`,
//! `delivering`, `failed`) on a watch channel:
//!
//! ```rust,no_run
//! # use clinic_export::core::export::ExportCoordinator;
//! # async fn example(coordinator: &ExportCoordinator) {
//! let mut states = coordinator.subscribe();
//! while states.changed().await.is_ok() {
//!     println!("export is {}", *states.borrow());
//! }
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::Result`]. The coordinator narrows failures
//! to [`core::export::ExportFailure`] for callers and logs the cause.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
