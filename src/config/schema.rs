//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Record store connection
    pub store: StoreConfig,

    /// Export output settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Booking confirmation notifier
    #[serde(default)]
    pub notifier: NotifierConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClinicExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.store.validate()?;
        self.export.validate()?;
        self.notifier.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Record store configuration
///
/// The store is reached through a PostgREST-compatible HTTP API
/// (`{base_url}/rest/v1/{table}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the backend project
    pub base_url: String,

    /// API key sent as `apikey` and bearer token
    /// Stored securely in memory and automatically zeroized on drop
    pub api_key: SecretString,

    /// Request timeout in seconds; the only timeout an export run is subject to
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("store.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("store.base_url must start with http:// or https://".to_string());
        }

        if self.api_key.expose_secret().is_empty() {
            return Err("store.api_key cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 600 {
            return Err(format!(
                "store.timeout_seconds must be between 1 and 600, got {}",
                self.timeout_seconds
            ));
        }

        Ok(())
    }
}

/// Export output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the workbook is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Booking confirmation notifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Send booking confirmations
    #[serde(default)]
    pub enabled: bool,

    /// Email service endpoint
    #[serde(default = "default_notifier_endpoint")]
    pub endpoint: String,

    /// Email service API key
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Sender used for the customer confirmation
    #[serde(default = "default_customer_sender")]
    pub customer_sender: String,

    /// Sender used for the operator notification
    #[serde(default = "default_operator_sender")]
    pub operator_sender: String,

    /// Fixed address that receives a copy of every booking
    #[serde(default = "default_operator_address")]
    pub operator_address: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NotifierConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if !self.enabled {
            return Ok(());
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err("notifier.endpoint must start with http:// or https://".to_string());
        }

        if self
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().is_empty())
            .unwrap_or(true)
        {
            return Err("notifier.api_key cannot be empty when notifier is enabled".to_string());
        }

        if !self.operator_address.contains('@') {
            return Err(format!(
                "notifier.operator_address '{}' is not an email address",
                self.operator_address
            ));
        }

        Ok(())
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_notifier_endpoint(),
            api_key: None,
            customer_sender: default_customer_sender(),
            operator_sender: default_operator_sender(),
            operator_address: default_operator_address(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_output_dir() -> String {
    "./exports".to_string()
}

fn default_notifier_endpoint() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_customer_sender() -> String {
    "Hilomè Skin Clinic <onboarding@resend.dev>".to_string()
}

fn default_operator_sender() -> String {
    "Hilomè Booking System <onboarding@resend.dev>".to_string()
}

fn default_operator_address() -> String {
    "cruzskin@gmail.com".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
