//! Notification module - delivers status messages to owners
//!
//! The [`Notifier`] trait is the seam between the scheduling core and the
//! chat transport. Implementations classify their own failures; the
//! scheduler only distinguishes permanent from transient.

pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

use crate::monitoring::OwnerId;

pub use telegram::TelegramNotifier;

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The recipient is gone for good (blocked the bot, deleted account)
    #[error("Permanent delivery failure: {0}")]
    Permanent(String),

    /// Anything expected to clear up on its own (network blip, 5xx)
    #[error("Transient delivery failure: {0}")]
    Transient(String),
}

/// Message delivery to a single owner
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, owner: OwnerId, text: &str) -> Result<(), DeliveryError>;
}
