//! PostgREST record store
//!
//! Reads collections from a Supabase-style REST endpoint:
//! `GET {base_url}/rest/v1/{table}?select=*&order={column}.{asc|desc}`.
//! Requests are not retried; an export that hits a store error fails and is
//! re-triggered by the operator.

use super::collection::Collection;
use super::traits::RecordStore;
use crate::config::StoreConfig;
use crate::domain::{ClinicError, Result, StoreError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;

/// PostgREST-backed [`RecordStore`]
pub struct PostgrestStore {
    base_url: String,
    client: Client,
    config: StoreConfig,
}

impl PostgrestStore {
    /// Create a new store client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client can't be built.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(30)))
            .build()
            .map_err(|e| {
                ClinicError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url,
            client,
            config,
        })
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection.table())
    }
}

#[async_trait]
impl RecordStore for PostgrestStore {
    async fn fetch_collection(&self, collection: Collection) -> Result<Vec<Value>> {
        let url = self.collection_url(collection);
        let order = collection.sort_key().to_string();
        let api_key = self.config.api_key.expose_secret().as_str();

        tracing::debug!(
            collection = %collection,
            order = %order,
            "Querying collection"
        );

        let resp = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", order.as_str())])
            .header("apikey", api_key)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StoreError::Timeout(format!("{collection}: {e}"))
                } else {
                    StoreError::ConnectionFailed(format!("{collection}: {e}"))
                }
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(StoreError::QueryFailed {
                collection: collection.to_string(),
                status,
                message,
            }
            .into());
        }

        let rows: Option<Vec<Value>> =
            resp.json().await.map_err(|e| StoreError::InvalidResponse {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(rows.unwrap_or_default())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
