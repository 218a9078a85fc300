//! The relay itself: remembering which Notion page each user has chosen, and
//! turning their Telegram messages into pages beneath it.
//!
//! Inbound events arrive as [event::Event]s and are handed to the
//! [dispatch::Dispatcher], which never fails; every error is reported to the
//! user and logged at the event boundary.

use error::RelayError;
use gateway::ChatGateway;
use model::ChatId;

mod content;
pub mod dispatch;
pub mod error;
pub mod event;
#[cfg(test)]
mod fake;
pub mod gateway;
pub mod model;
mod selection;
pub mod store;
mod text;

pub use dispatch::Dispatcher;
pub use store::DestinationStore;

/// Tell the user about a failure, if there's anything to tell them, and pass
/// the outcome through for logging.
async fn report(
    chat: &dyn ChatGateway,
    to: ChatId,
    res: Result<(), RelayError>,
) -> Result<(), RelayError> {
    if let Err(e) = &res {
        if let Some(text) = e.reply_text() {
            if let Err(send_err) = chat.send_text(to, text).await {
                tracing::error!("Failed to report \"{}\" to chat {}: {}", e, to, send_err);
            }
        }
    }

    res
}
