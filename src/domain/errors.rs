//! Domain error types
//!
//! This module defines the error hierarchy for the export engine.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Record store errors
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// Booking notifier errors
    #[error("Notifier error: {0}")]
    Notifier(#[from] NotifierError),

    /// Workbook assembly errors
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Artifact delivery errors
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Record store errors
///
/// Errors that occur when reading collections from the backing store.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the store
    #[error("Failed to connect to record store: {0}")]
    ConnectionFailed(String),

    /// Query rejected by the store
    #[error("Query on '{collection}' failed with status {status}: {message}")]
    QueryFailed {
        collection: String,
        status: u16,
        message: String,
    },

    /// Response body could not be decoded
    #[error("Invalid response for '{collection}': {message}")]
    InvalidResponse { collection: String, message: String },

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Booking notifier errors
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Failed to reach the email service
    #[error("Failed to connect to email service: {0}")]
    ConnectionFailed(String),

    /// Email service rejected the message
    #[error("Email to {recipient} rejected with status {status}: {message}")]
    Rejected {
        recipient: String,
        status: u16,
        message: String,
    },

    /// Both the customer and the operator deliveries failed
    #[error("All booking emails failed: {}", .0.join("; "))]
    AllFailed(Vec<String>),

    /// Notifier is not configured
    #[error("Notifier not configured: {0}")]
    NotConfigured(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<rust_xlsxwriter::XlsxError> for ClinicError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ClinicError::Workbook(err.to_string())
    }
}
