//! Record fetcher
//!
//! Reads all seven collections concurrently and decodes each row into its
//! typed record. The first failing query or undecodable row fails the whole
//! fetch; there is no partial snapshot.

use crate::adapters::store::{Collection, RecordStore};
use crate::domain::{
    BenefitClaim, Booking, ClinicError, ExportData, Member, MembershipBenefit, PatientRecord,
    ReferralReward, Result, StoreError, Transaction,
};
use crate::log_collection_fetched;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Fetches an [`ExportData`] snapshot from a [`RecordStore`]
pub struct RecordFetcher {
    store: Arc<dyn RecordStore>,
}

impl RecordFetcher {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Run the seven collection queries and join on all of them
    ///
    /// # Errors
    ///
    /// Returns the first store error, or [`StoreError::InvalidResponse`] for a
    /// row that doesn't match its record schema.
    pub async fn fetch_all(&self) -> Result<ExportData> {
        tracing::info!(store = self.store.base_url(), "Fetching collections");

        let (
            bookings,
            members,
            patient_records,
            transactions,
            benefits,
            benefit_claims,
            referral_rewards,
        ) = tokio::try_join!(
            self.fetch::<Booking>(Collection::Bookings),
            self.fetch::<Member>(Collection::Members),
            self.fetch::<PatientRecord>(Collection::PatientRecords),
            self.fetch::<Transaction>(Collection::Transactions),
            self.fetch::<MembershipBenefit>(Collection::MembershipBenefits),
            self.fetch::<BenefitClaim>(Collection::BenefitClaims),
            self.fetch::<ReferralReward>(Collection::ReferralRewards),
        )?;

        let data = ExportData {
            bookings,
            members,
            patient_records,
            transactions,
            benefits,
            benefit_claims,
            referral_rewards,
        };

        tracing::info!(records = data.total_records(), "Fetched all collections");
        Ok(data)
    }

    async fn fetch<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let rows = self.store.fetch_collection(collection).await?;

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                serde_json::from_value(row).map_err(|e| {
                    ClinicError::from(StoreError::InvalidResponse {
                        collection: collection.to_string(),
                        message: format!("row {i}: {e}"),
                    })
                })
            })
            .collect::<Result<Vec<T>>>()?;

        log_collection_fetched!(collection, records.len());
        Ok(records)
    }
}
