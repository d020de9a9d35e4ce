//! Resend email notifier
//!
//! Posts `{from, to, subject, html}` JSON to a Resend-compatible `/emails`
//! endpoint with bearer authentication.

use super::templates;
use super::traits::{BookingConfirmation, BookingNotifier};
use crate::config::NotifierConfig;
use crate::domain::{ClinicError, NotifierError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct OutgoingEmail<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: String,
}

/// [`BookingNotifier`] backed by the Resend HTTP API
pub struct ResendNotifier {
    client: Client,
    config: NotifierConfig,
}

impl ResendNotifier {
    /// Create a new notifier
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::NotConfigured`] if no API key is set, or a
    /// configuration error if the HTTP client can't be built.
    pub fn new(config: NotifierConfig) -> Result<Self> {
        let has_key = config
            .api_key
            .as_ref()
            .map(|k| !k.expose_secret().is_empty())
            .unwrap_or(false);
        if !has_key {
            return Err(NotifierError::NotConfigured("notifier.api_key is not set".to_string()).into());
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                ClinicError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    async fn deliver(&self, email: &OutgoingEmail<'_>) -> Result<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_default();
        let recipient = email.to.join(", ");

        let resp = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(email)
            .send()
            .await
            .map_err(|e| NotifierError::ConnectionFailed(format!("{recipient}: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(NotifierError::Rejected {
                recipient,
                status,
                message,
            }
            .into());
        }

        tracing::debug!(recipient = %recipient, subject = email.subject, "Email accepted");
        Ok(())
    }
}

#[async_trait]
impl BookingNotifier for ResendNotifier {
    /// Attempts both deliveries; a failed customer email never suppresses
    /// the operator copy
    ///
    /// # Errors
    ///
    /// Returns the failing delivery's error when one of the two fails, or
    /// [`NotifierError::AllFailed`] when both do.
    async fn send(&self, booking: &BookingConfirmation) -> Result<()> {
        tracing::info!(email = %booking.email, "Sending booking confirmation");

        let customer = OutgoingEmail {
            from: &self.config.customer_sender,
            to: vec![booking.email.as_str()],
            subject: templates::CUSTOMER_SUBJECT,
            html: templates::customer_html(booking, &self.config.operator_address),
        };
        let operator_subject = templates::operator_subject(booking);
        let operator = OutgoingEmail {
            from: &self.config.operator_sender,
            to: vec![self.config.operator_address.as_str()],
            subject: &operator_subject,
            html: templates::operator_html(booking),
        };

        let mut failures = Vec::new();
        for (kind, email) in [("customer", &customer), ("operator", &operator)] {
            if let Err(e) = self.deliver(email).await {
                tracing::warn!(kind, error = %e, "Booking email not delivered");
                failures.push(e);
            }
        }

        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(NotifierError::AllFailed(
                failures.iter().map(ToString::to_string).collect(),
            )
            .into()),
        }
    }

    fn name(&self) -> &str {
        "resend"
    }
}
