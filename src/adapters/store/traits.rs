//! Record store trait definition
//!
//! Abstracts the backend the export reads from, so the fetcher can run
//! against the hosted PostgREST API or an in-process fake in tests.

use super::collection::Collection;
use crate::domain::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only access to the backing store
///
/// # Example
///
/// ```no_run
/// use clinic_export::adapters::store::{Collection, PostgrestStore, RecordStore};
/// use clinic_export::config::{secret_string, StoreConfig};
///
/// # async fn example() -> clinic_export::domain::Result<()> {
/// let store = PostgrestStore::new(StoreConfig {
///     base_url: "https://project.supabase.co".to_string(),
///     api_key: secret_string("key".to_string()),
///     timeout_seconds: 30,
/// })?;
///
/// let rows = store.fetch_collection(Collection::Bookings).await?;
/// println!("{} bookings", rows.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read every row of `collection`, sorted by [`Collection::sort_key`]
    ///
    /// No filtering or pagination is applied. A store that has nothing to
    /// return yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::StoreError`] (wrapped) when the store can't be
    /// reached, rejects the query, or returns a body that isn't a JSON array.
    async fn fetch_collection(&self, collection: Collection) -> Result<Vec<Value>>;

    /// Location of the store, for logging
    fn base_url(&self) -> &str;
}
