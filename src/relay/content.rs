//! Turning inbound messages into pages beneath the user's chosen
//! destination.

use super::{
    error::{ContentKind, CreateFailure, RelayError},
    gateway::{ChatGateway, Workspace},
    model::{ContentItem, Conversation, DestinationId, PhotoRef, UserId},
    report,
    store::DestinationStore,
    text,
};
use std::sync::Arc;
use tracing::info;

pub struct ContentRelay {
    workspace: Arc<dyn Workspace>,
    chat: Arc<dyn ChatGateway>,
    store: Arc<DestinationStore>,
}

impl ContentRelay {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        chat: Arc<dyn ChatGateway>,
        store: Arc<DestinationStore>,
    ) -> Self {
        ContentRelay {
            workspace,
            chat,
            store,
        }
    }

    /// Create a page from a text message: the first line is the title, the
    /// rest is the body.
    pub async fn handle_text(&self, conv: &Conversation, raw: &str) -> Result<(), RelayError> {
        let res = self.relay_text(conv, raw).await;
        report(self.chat.as_ref(), conv.chat, res).await
    }

    async fn relay_text(&self, conv: &Conversation, raw: &str) -> Result<(), RelayError> {
        let parent = self.destination(conv.user).await?;
        let item = ContentItem::from_text(raw);

        self.submit(conv, &parent, &item, ContentKind::Text).await?;
        self.reply(conv, text::PAGE_CREATED).await
    }

    /// Create a page holding a single image, titled with the caption.
    pub async fn handle_photo(
        &self,
        conv: &Conversation,
        photo: &PhotoRef,
        caption: Option<&str>,
    ) -> Result<(), RelayError> {
        let res = self.relay_photo(conv, photo, caption).await;
        report(self.chat.as_ref(), conv.chat, res).await
    }

    async fn relay_photo(
        &self,
        conv: &Conversation,
        photo: &PhotoRef,
        caption: Option<&str>,
    ) -> Result<(), RelayError> {
        let parent = self.destination(conv.user).await?;

        let image_url = self
            .chat
            .resolve_photo(&photo.file_id)
            .await
            .map_err(|e| RelayError::RemoteCreate(ContentKind::Photo, CreateFailure::Photo(e)))?;

        let caption = caption
            .filter(|c| !c.is_empty())
            .unwrap_or(text::DEFAULT_CAPTION);

        let item = ContentItem::Photo {
            caption: caption.to_owned(),
            image_url,
        };

        self.submit(conv, &parent, &item, ContentKind::Photo).await?;
        self.reply(conv, text::IMAGE_SAVED).await
    }

    /// `/notion some text` behaves as though "some text" had been sent on its
    /// own.
    pub async fn handle_command_text(
        &self,
        conv: &Conversation,
        args: &[String],
    ) -> Result<(), RelayError> {
        if args.is_empty() {
            return self.reply(conv, text::NOTION_USAGE).await;
        }

        self.handle_text(conv, &args.join(" ")).await
    }

    async fn destination(&self, user: UserId) -> Result<DestinationId, RelayError> {
        self.store
            .selected(user)
            .await
            .ok_or(RelayError::NoDestinationSelected)
    }

    /// One attempt only. Failures are reported and the content is dropped.
    async fn submit(
        &self,
        conv: &Conversation,
        parent: &DestinationId,
        item: &ContentItem,
        kind: ContentKind,
    ) -> Result<(), RelayError> {
        self.workspace
            .create_page(parent, item)
            .await
            .map_err(|e| RelayError::RemoteCreate(kind, CreateFailure::Workspace(e)))?;

        info!("Created {:?} page under {} for user {}", kind, parent, conv.user);
        Ok(())
    }

    async fn reply(&self, conv: &Conversation, text: &str) -> Result<(), RelayError> {
        self.chat
            .send_text(conv.chat, text)
            .await
            .map_err(RelayError::Reply)
    }
}
