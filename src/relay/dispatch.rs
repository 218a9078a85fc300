//! Route each inbound event to the flow that handles it.

use super::{
    content::ContentRelay,
    error::RelayError,
    event::{Command, Event, Press},
    gateway::{ChatGateway, Workspace},
    model::{ChatId, Conversation, UserId},
    selection::{parse_choice, SelectionFlow},
    store::DestinationStore,
    text,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Handles events from any number of users concurrently. Events from one
/// user are expected in the order they were sent.
pub struct Dispatcher {
    selection: SelectionFlow,
    relay: ContentRelay,
    chat: Arc<dyn ChatGateway>,
}

impl Dispatcher {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        chat: Arc<dyn ChatGateway>,
        store: Arc<DestinationStore>,
    ) -> Self {
        Dispatcher {
            selection: SelectionFlow::new(workspace.clone(), chat.clone(), store.clone()),
            relay: ContentRelay::new(workspace, chat.clone(), store),
            chat,
        }
    }

    /// Handle one event to completion. Nothing escapes: failures have already
    /// been reported to the user by the time they're logged here.
    pub async fn dispatch(&self, event: Event) {
        info!("Handling {} from user {}", event.kind(), event.user());

        if let Err(e) = self.handle(event).await {
            e.log();
        }
    }

    async fn handle(&self, event: Event) -> Result<(), RelayError> {
        match event {
            Event::Command(conv, Command::Start { first_name }) => {
                self.start(&conv, &first_name).await
            }
            Event::Command(conv, Command::Help) => self.reply(conv.chat, text::HELP).await,
            Event::Command(conv, Command::ChangePage) => {
                self.selection.show_selection(conv.chat).await
            }
            Event::Command(conv, Command::Notion { args }) => {
                self.relay.handle_command_text(&conv, &args).await
            }
            Event::Text(conv, raw) => self.relay.handle_text(&conv, &raw).await,
            Event::Photo {
                conv,
                photo,
                caption,
            } => {
                self.relay
                    .handle_photo(&conv, &photo, caption.as_deref())
                    .await
            }
            Event::Press { user, data, press } => self.press(user, &data, &press).await,
        }
    }

    async fn start(&self, conv: &Conversation, first_name: &str) -> Result<(), RelayError> {
        self.reply(conv.chat, &text::welcome(first_name)).await?;
        self.selection.show_selection(conv.chat).await
    }

    async fn press(&self, user: UserId, data: &str, press: &Press) -> Result<(), RelayError> {
        match parse_choice(data) {
            Some(dest) => self.selection.on_choice_made(user, dest, press).await,
            None => {
                debug!("Ignoring press with data {:?}", data);
                self.selection.ignore_press(press).await
            }
        }
    }

    async fn reply(&self, chat: ChatId, text: &str) -> Result<(), RelayError> {
        self.chat
            .send_text(chat, text)
            .await
            .map_err(RelayError::Reply)
    }
}
