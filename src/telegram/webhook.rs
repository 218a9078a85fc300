//! Register or remove the webhook Telegram delivers updates to.
//!
//! With a webhook registered Telegram POSTs every update to us (see
//! [super::router]); without one we have to ask for them (see [super::poll]).
//! The two are mutually exclusive on Telegram's side.

use super::{api::TelegramClient, auth::WebhookSecret, error::TelegramError};
use serde::{de::IgnoredAny, Serialize};
use url::Url;

/// The update types the relay handles. Anything else isn't delivered.
pub const ALLOWED_UPDATES: [&str; 2] = ["message", "callback_query"];

/// <https://core.telegram.org/bots/api#setwebhook>
#[derive(Serialize)]
struct SetWebhookRequest<'a> {
    url: &'a Url,
    secret_token: &'a str,
    allowed_updates: &'a [&'a str],
}

/// <https://core.telegram.org/bots/api#deletewebhook>
#[derive(Serialize)]
struct DeleteWebhookRequest {
    drop_pending_updates: bool,
}

impl TelegramClient {
    pub async fn set_webhook(&self, url: &Url, secret: &WebhookSecret) -> Result<(), TelegramError> {
        let _: IgnoredAny = self
            .call(
                "setWebhook",
                &SetWebhookRequest {
                    url,
                    secret_token: &secret.0,
                    allowed_updates: &ALLOWED_UPDATES,
                },
            )
            .await?;

        Ok(())
    }

    /// Pending updates are kept so that switching to polling loses nothing.
    pub async fn delete_webhook(&self) -> Result<(), TelegramError> {
        let _: IgnoredAny = self
            .call(
                "deleteWebhook",
                &DeleteWebhookRequest {
                    drop_pending_updates: false,
                },
            )
            .await?;

        Ok(())
    }
}
