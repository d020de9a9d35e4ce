//! Logging and observability
//!
//! Structured logging via `tracing`:
//! - Console output with `RUST_LOG`-style filtering
//! - Optional JSON file logging with rotation

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an export stage transition
///
/// # Example
///
/// ```no_run
/// use clinic_export::log_stage;
/// use clinic_export::core::export::ExportState;
///
/// log_stage!(ExportState::Fetching);
/// ```
#[macro_export]
macro_rules! log_stage {
    ($state:expr) => {
        tracing::debug!(state = %$state, "Export stage changed");
    };
}

/// Log a collection fetch result
///
/// # Example
///
/// ```no_run
/// use clinic_export::log_collection_fetched;
///
/// log_collection_fetched!("bookings", 42);
/// ```
#[macro_export]
macro_rules! log_collection_fetched {
    ($collection:expr, $count:expr) => {
        tracing::debug!(
            collection = %$collection,
            count = $count,
            "Fetched collection"
        );
    };
}
