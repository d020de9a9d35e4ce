//! Booking notifier trait definition

use crate::domain::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Details of a newly submitted booking
///
/// Field names follow the booking form's JSON payload (`contactNumber`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub membership: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BookingConfirmation {
    /// Message text, if one was given and isn't blank
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Outbound booking confirmation channel
///
/// One call produces two independent deliveries: a confirmation to the
/// customer and a copy to the clinic operator. Both are attempted even when
/// the first fails.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    /// Send both booking messages
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::NotifierError`] (wrapped) if either delivery fails.
    async fn send(&self, booking: &BookingConfirmation) -> Result<()>;

    /// Notifier name, for logging
    fn name(&self) -> &str;
}
