//! Notify-booking command implementation
//!
//! Sends the customer confirmation and the operator copy for one booking,
//! read as JSON from a file or stdin.

use crate::adapters::notifier::{BookingConfirmation, BookingNotifier, ResendNotifier};
use crate::config::load_config;
use clap::Args;
use std::io::Read;

/// Arguments for the notify-booking command
#[derive(Args, Debug)]
pub struct NotifyArgs {
    /// Booking JSON (`name`, `email`, `contactNumber`, `membership`, `date`,
    /// `time`, optional `message`); `-` reads stdin
    #[arg(short, long)]
    pub payload: String,
}

impl NotifyArgs {
    /// Execute the notify-booking command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        if !config.notifier.enabled {
            eprintln!("Notifier is disabled; set notifier.enabled = true");
            return Ok(2);
        }

        let booking = match self.read_payload() {
            Ok(b) => b,
            Err(e) => {
                tracing::error!(error = %e, "Invalid booking payload");
                eprintln!("Invalid booking payload: {e}");
                return Ok(2);
            }
        };

        let notifier = ResendNotifier::new(config.notifier)?;
        match notifier.send(&booking).await {
            Ok(()) => {
                println!("Booking confirmation sent to {}", booking.email);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to send booking confirmation");
                eprintln!("Failed to send booking confirmation");
                Ok(4)
            }
        }
    }

    fn read_payload(&self) -> anyhow::Result<BookingConfirmation> {
        let raw = if self.payload == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(&self.payload)?
        };
        Ok(serde_json::from_str(&raw)?)
    }
}
