//! Receive updates by long polling, for when no webhook is configured.

use super::{api::TelegramClient, error::TelegramError, update::Update, webhook::ALLOWED_UPDATES};
use crate::relay::Dispatcher;
use serde::Serialize;
use std::{sync::Arc, time::Duration};
use tracing::{error, info, warn};

/// How long Telegram holds a `getUpdates` request open waiting for updates.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(30);

/// How long to wait before polling again after a failure.
const BACKOFF: Duration = Duration::from_secs(5);

/// <https://core.telegram.org/bots/api#getupdates>
#[derive(Serialize)]
struct GetUpdatesRequest<'a> {
    /// Acknowledges every update below it.
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: &'a [&'a str],
}

impl TelegramClient {
    /// Wait for updates after `offset`. The request is allowed `grace` longer
    /// than Telegram holds it open.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        grace: Duration,
    ) -> Result<Vec<Update>, TelegramError> {
        let req = self
            .post("getUpdates")
            .timeout(POLL_TIMEOUT + grace)
            .json(&GetUpdatesRequest {
                offset,
                timeout: POLL_TIMEOUT.as_secs(),
                allowed_updates: &ALLOWED_UPDATES,
            });

        self.call_with(req).await
    }
}

/// Poll forever, dispatching updates one at a time in the order Telegram
/// delivers them.
pub async fn run(client: TelegramClient, dispatcher: Arc<Dispatcher>, grace: Duration) {
    info!("Polling for updates");

    let mut offset: Option<i64> = None;

    loop {
        let updates = match client.get_updates(offset, grace).await {
            Ok(updates) => updates,
            Err(e) => {
                error!("Failed to get updates: {}", e);
                tokio::time::sleep(BACKOFF).await;
                continue;
            }
        };

        for update in updates {
            offset = Some(next_offset(offset, update.update_id));

            match update.into_event() {
                Some(event) => dispatcher.dispatch(event).await,
                None => warn!("Ignoring unsupported update"),
            }
        }
    }
}

/// Updates are confirmed by asking for those after them.
fn next_offset(current: Option<i64>, update_id: i64) -> i64 {
    current.map_or(update_id + 1, |o| o.max(update_id + 1))
}
