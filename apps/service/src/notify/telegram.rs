use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::{ApiError, RequestError};

use super::{DeliveryError, Notifier};
use crate::monitoring::OwnerId;

/// Notifier that delivers over the Telegram Bot API
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, owner: OwnerId, text: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_message(ChatId(owner), text)
            .await
            .map(|_| ())
            .map_err(classify_send_error)
    }
}

/// Decide whether a failed send means the recipient is gone
///
/// Only "recipient gone" answers from the API end the subscription;
/// everything else is expected to clear up by a later tick.
fn classify_send_error(err: RequestError) -> DeliveryError {
    match &err {
        RequestError::Api(
            ApiError::BotBlocked | ApiError::ChatNotFound | ApiError::UserDeactivated,
        ) => DeliveryError::Permanent(err.to_string()),
        _ => DeliveryError::Transient(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_gone_is_permanent() {
        for api_error in [
            ApiError::BotBlocked,
            ApiError::ChatNotFound,
            ApiError::UserDeactivated,
        ] {
            let classified = classify_send_error(RequestError::Api(api_error));
            assert!(matches!(classified, DeliveryError::Permanent(_)));
        }
    }

    #[test]
    fn test_other_api_errors_are_transient() {
        let classified =
            classify_send_error(RequestError::Api(ApiError::Unknown("boom".to_string())));
        assert!(matches!(classified, DeliveryError::Transient(_)));
    }
}
