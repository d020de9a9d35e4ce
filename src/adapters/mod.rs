//! External system integrations.
//!
//! - [`store`] - Read-only record store (PostgREST over HTTP)
//! - [`notifier`] - Booking confirmation emails (Resend over HTTP)
//!
//! # Design Pattern
//!
//! Adapters isolate external services behind traits ([`store::RecordStore`],
//! [`notifier::BookingNotifier`]) so the export pipeline can be tested
//! against in-process fakes.
//!
//! ```rust,no_run
//! use clinic_export::adapters::store::{Collection, PostgrestStore, RecordStore};
//! use clinic_export::config::{secret_string, StoreConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PostgrestStore::new(StoreConfig {
//!     base_url: "https://project.supabase.co".to_string(),
//!     api_key: secret_string("service-key".to_string()),
//!     timeout_seconds: 30,
//! })?;
//!
//! let members = store.fetch_collection(Collection::Members).await?;
//! # Ok(())
//! # }
//! ```

pub mod notifier;
pub mod store;
