//! Configuration management.
//!
//! TOML configuration with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLINIC_EXPORT_<SECTION>_<KEY>` overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [store]
//! base_url = "https://project.supabase.co"
//! api_key = "${CLINIC_EXPORT_STORE_KEY}"
//!
//! [export]
//! output_dir = "./exports"
//!
//! [notifier]
//! enabled = true
//! api_key = "${RESEND_API_KEY}"
//! operator_address = "frontdesk@example.com"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ClinicExportConfig, ExportConfig, LoggingConfig, NotifierConfig,
    StoreConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
