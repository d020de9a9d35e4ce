//! Booking confirmation notifier
//!
//! Outbound boundary used when a booking is submitted: the customer gets a
//! confirmation and the clinic operator gets a copy. Sending is fire-and-forget
//! from the caller's point of view, see [`dispatch_booking_confirmation`].

pub mod resend;
pub mod templates;
pub mod traits;

pub use resend::ResendNotifier;
pub use traits::{BookingConfirmation, BookingNotifier};

use std::sync::Arc;
use tokio::task::JoinHandle;

/// Send a booking confirmation on a detached task
///
/// The caller never waits on or fails because of the email service; delivery
/// errors are logged. The returned handle may be dropped.
pub fn dispatch_booking_confirmation(
    notifier: Arc<dyn BookingNotifier>,
    booking: BookingConfirmation,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match notifier.send(&booking).await {
            Ok(()) => tracing::info!(
                notifier = notifier.name(),
                email = %booking.email,
                "Booking confirmation sent"
            ),
            Err(e) => tracing::error!(
                notifier = notifier.name(),
                email = %booking.email,
                error = %e,
                "Failed to send booking confirmation"
            ),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NotifierError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingNotifier {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl BookingNotifier for CountingNotifier {
        async fn send(&self, _booking: &BookingConfirmation) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(NotifierError::ConnectionFailed("down".to_string()).into());
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn booking() -> BookingConfirmation {
        BookingConfirmation {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            contact_number: "1".to_string(),
            membership: "Green".to_string(),
            date: "2025-03-01".to_string(),
            time: "9:00".to_string(),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_dispatch_runs_send() {
        let notifier = Arc::new(CountingNotifier {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        dispatch_booking_confirmation(notifier.clone(), booking())
            .await
            .unwrap();
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dispatch_absorbs_failure() {
        let notifier = Arc::new(CountingNotifier {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let handle = dispatch_booking_confirmation(notifier.clone(), booking());
        assert!(handle.await.is_ok());
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }
}
