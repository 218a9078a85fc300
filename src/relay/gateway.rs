//! The narrow interfaces the relay needs from the chat platform and the
//! workspace, and their implementations for Telegram and Notion.

use super::model::{Candidate, ChatId, Choice, ContentItem, DestinationId, MessageId};
use crate::{
    notion::{Block, NotionClient, NotionError, PageId},
    telegram::{InlineKeyboardButton, InlineKeyboardMarkup, TelegramClient, TelegramError},
};
use async_trait::async_trait;
use url::Url;

/// Outbound chat operations.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), TelegramError>;

    /// Send a message with one button per choice.
    async fn send_choices(
        &self,
        chat: ChatId,
        prompt: &str,
        choices: &[Choice],
    ) -> Result<(), TelegramError>;

    async fn edit_text(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
    ) -> Result<(), TelegramError>;

    /// Acknowledge a button press so the client stops showing it as pending.
    async fn acknowledge(&self, press_id: &str) -> Result<(), TelegramError>;

    /// Turn an inbound photo into a URL the workspace can fetch.
    async fn resolve_photo(&self, file_id: &str) -> Result<Url, TelegramError>;
}

/// Workspace operations.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Every page the integration can see, in a single pass.
    async fn list_pages(&self) -> Result<Vec<Candidate>, NotionError>;

    async fn create_page(
        &self,
        parent: &DestinationId,
        item: &ContentItem,
    ) -> Result<(), NotionError>;
}

#[async_trait]
impl ChatGateway for TelegramClient {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), TelegramError> {
        self.send_message(chat.0, text, None).await
    }

    async fn send_choices(
        &self,
        chat: ChatId,
        prompt: &str,
        choices: &[Choice],
    ) -> Result<(), TelegramError> {
        let markup = InlineKeyboardMarkup::single_column(choices.iter().map(|c| {
            InlineKeyboardButton {
                text: c.label.clone(),
                callback_data: c.data.clone(),
            }
        }));

        self.send_message(chat.0, prompt, Some(&markup)).await
    }

    async fn edit_text(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
    ) -> Result<(), TelegramError> {
        self.edit_message_text(chat.0, message.0, text).await
    }

    async fn acknowledge(&self, press_id: &str) -> Result<(), TelegramError> {
        self.answer_callback_query(press_id).await
    }

    async fn resolve_photo(&self, file_id: &str) -> Result<Url, TelegramError> {
        self.resolve_file_url(file_id).await
    }
}

#[async_trait]
impl Workspace for NotionClient {
    async fn list_pages(&self) -> Result<Vec<Candidate>, NotionError> {
        let pages = self.find_pages().await?;

        Ok(pages
            .into_iter()
            .map(|p| Candidate {
                id: DestinationId(p.id.0),
                title: p.title,
            })
            .collect())
    }

    async fn create_page(
        &self,
        parent: &DestinationId,
        item: &ContentItem,
    ) -> Result<(), NotionError> {
        let (title, block) = match item {
            ContentItem::Text { title, body } => (title, Block::Paragraph(body)),
            ContentItem::Photo { caption, image_url } => (caption, Block::ExternalImage(image_url)),
        };

        self.post_page(&PageId(parent.0.clone()), title, &block)
            .await
            .map(|_| ())
    }
}
