//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use clinic_export::adapters::store::{Collection, RecordStore};
use clinic_export::domain::{Result, StoreError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

/// In-memory store serving fixed rows per collection
#[derive(Default)]
pub struct MemoryStore {
    rows: HashMap<Collection, Vec<Value>>,
    failing: Option<Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, collection: Collection, rows: Vec<Value>) -> Self {
        self.rows.insert(collection, rows);
        self
    }

    pub fn failing_on(mut self, collection: Collection) -> Self {
        self.failing = Some(collection);
        self
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_collection(&self, collection: Collection) -> Result<Vec<Value>> {
        if self.failing == Some(collection) {
            return Err(StoreError::QueryFailed {
                collection: collection.to_string(),
                status: 503,
                message: "unavailable".to_string(),
            }
            .into());
        }
        Ok(self.rows.get(&collection).cloned().unwrap_or_default())
    }

    fn base_url(&self) -> &str {
        "memory://clinic"
    }
}

/// Store that holds the bookings query until released
pub struct GatedStore {
    pub inner: MemoryStore,
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl GatedStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl RecordStore for GatedStore {
    async fn fetch_collection(&self, collection: Collection) -> Result<Vec<Value>> {
        if collection == Collection::Bookings {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.fetch_collection(collection).await
    }

    fn base_url(&self) -> &str {
        "memory://gated"
    }
}

/// A small clinic: three bookings, three members (one referral), two
/// transactions (one for a deleted member), two benefits and one claim
pub fn clinic_store() -> MemoryStore {
    MemoryStore::new()
        .with(
            Collection::Bookings,
            vec![
                json!({"id": "b1", "name": "Ana Cruz", "email": "ana@example.com", "status": "pending", "created_at": "2025-02-03T10:00:00+00:00"}),
                json!({"id": "b2", "name": "Ben Reyes", "email": "ben@example.com", "status": "completed", "membership": "Gold"}),
                json!({"id": "b3", "name": "Cy Santos", "email": "cy@example.com", "status": "no-show", "message": null}),
            ],
        )
        .with(
            Collection::Members,
            vec![
                json!({"id": "m1", "name": "Ana Cruz", "email": "ana@example.com", "membership_type": "Gold", "status": "active", "referral_code": "ABC123", "referral_count": 1}),
                json!({"id": "m2", "name": "Ben Reyes", "email": "ben@example.com", "membership_type": "gold", "status": "active", "referred_by": "ABC123", "created_at": "2025-01-20T08:00:00Z"}),
                json!({"id": "m3", "name": "Cy Santos", "email": "cy@example.com", "membership_type": "Green", "status": "expired", "referred_by": "", "referral_count": null}),
            ],
        )
        .with(
            Collection::PatientRecords,
            vec![json!({"id": "p1", "name": "Ana Cruz", "email": "ana@example.com", "source": "booking"})],
        )
        .with(
            Collection::Transactions,
            vec![
                json!({"id": "t1", "member_id": "m1", "amount": 1000, "payment_status": "completed"}),
                json!({"id": "t2", "member_id": "ghost", "amount": 500.25, "payment_status": "pending"}),
            ],
        )
        .with(
            Collection::MembershipBenefits,
            vec![
                json!({"id": "bn1", "membership_type": "Gold", "benefit_name": "Facial", "total_quantity": 2}),
                json!({"id": "bn2", "membership_type": "Green", "benefit_name": "Peel", "total_quantity": 1}),
            ],
        )
        .with(
            Collection::BenefitClaims,
            vec![json!({"id": "c1", "member_id": "m1", "benefit_id": "bn1", "claimed_at": "2025-02-01T00:00:00Z"})],
        )
        .with(Collection::ReferralRewards, vec![json!({"id": "r1", "status": "pending"})])
}
