//! Listing destinations, offering them as buttons, and recording choices.

use super::{
    error::RelayError,
    event::Press,
    gateway::{ChatGateway, Workspace},
    model::{ChatId, Choice, Destination, DestinationId, UserId},
    report,
    store::DestinationStore,
    text,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Buttons per message.
pub const BATCH_SIZE: usize = 10;

/// Prefix on button data identifying a destination choice.
pub const CHOICE_PREFIX: &str = "page_";

pub struct SelectionFlow {
    workspace: Arc<dyn Workspace>,
    chat: Arc<dyn ChatGateway>,
    store: Arc<DestinationStore>,
}

impl SelectionFlow {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        chat: Arc<dyn ChatGateway>,
        store: Arc<DestinationStore>,
    ) -> Self {
        SelectionFlow {
            workspace,
            chat,
            store,
        }
    }

    pub async fn list_destinations(&self) -> Result<Vec<Destination>, RelayError> {
        let pages = self
            .workspace
            .list_pages()
            .await
            .map_err(RelayError::RemoteList)?;

        Ok(pages.into_iter().map(Destination::from).collect())
    }

    /// Send one message of buttons per batch of destinations, returning how
    /// many were sent. Nothing is sent for an empty list.
    pub async fn present_choices(
        &self,
        chat: ChatId,
        destinations: &[Destination],
    ) -> Result<usize, RelayError> {
        let batches = choice_batches(destinations);

        for batch in &batches {
            self.chat
                .send_choices(chat, text::CHOOSE_PAGE, batch)
                .await
                .map_err(RelayError::Reply)?;
        }

        Ok(batches.len())
    }

    /// List destinations and offer them, telling the user if there are none
    /// or if listing fails. Any existing choice is left alone.
    pub async fn show_selection(&self, chat: ChatId) -> Result<(), RelayError> {
        let res = self.try_show_selection(chat).await;
        report(self.chat.as_ref(), chat, res).await
    }

    async fn try_show_selection(&self, chat: ChatId) -> Result<(), RelayError> {
        let destinations = self.list_destinations().await?;

        if destinations.is_empty() {
            return self
                .chat
                .send_text(chat, text::NO_PAGES)
                .await
                .map_err(RelayError::Reply);
        }

        self.present_choices(chat, &destinations).await.map(|_| ())
    }

    /// Record a choice, replacing any earlier one, then acknowledge the press
    /// and confirm.
    pub async fn on_choice_made(
        &self,
        user: UserId,
        dest: DestinationId,
        press: &Press,
    ) -> Result<(), RelayError> {
        let previous = self.store.select(user, dest.clone()).await;
        info!(
            "User {} selected {} (replacing: {})",
            user,
            dest,
            previous.map_or_else(|| "nothing".to_owned(), |d| d.to_string())
        );

        // The choice stands even if Telegram misses the acknowledgement.
        if let Err(e) = self.chat.acknowledge(&press.id).await {
            warn!("Failed to acknowledge press {}: {}", press.id, e);
        }

        match press.origin {
            Some((chat, message)) => self
                .chat
                .edit_text(chat, message, text::PAGE_SELECTED)
                .await
                .map_err(RelayError::Reply),
            None => Ok(()),
        }
    }

    /// Presses that aren't destination choices still need acknowledging.
    pub async fn ignore_press(&self, press: &Press) -> Result<(), RelayError> {
        self.chat
            .acknowledge(&press.id)
            .await
            .map_err(RelayError::Reply)
    }
}

/// Split destinations into batches of buttons, preserving order.
pub fn choice_batches(destinations: &[Destination]) -> Vec<Vec<Choice>> {
    destinations
        .chunks(BATCH_SIZE)
        .map(|batch| {
            batch
                .iter()
                .map(|d| Choice {
                    label: format!("{} 📄", d.title),
                    data: format!("{}{}", CHOICE_PREFIX, d.id),
                })
                .collect()
        })
        .collect()
}

/// The destination a button refers to, if it's a choice button at all.
pub fn parse_choice(data: &str) -> Option<DestinationId> {
    data.strip_prefix(CHOICE_PREFIX)
        .filter(|id| !id.is_empty())
        .map(|id| DestinationId(id.to_owned()))
}
