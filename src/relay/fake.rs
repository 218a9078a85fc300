//! In-memory stand-ins for Telegram and Notion which record every call.

use super::{
    gateway::{ChatGateway, Workspace},
    model::{Candidate, ChatId, Choice, ContentItem, DestinationId, MessageId},
};
use crate::{
    notion::{auth::NotionToken, NotionClient, NotionError},
    telegram::TelegramError,
};
use async_trait::async_trait;
use std::{sync::Mutex, time::Duration};
use tokio::net::TcpListener;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(ChatId, String),
    Choices(ChatId, String, Vec<Choice>),
    Edit(ChatId, MessageId, String),
    Ack(String),
}

#[derive(Default)]
pub struct FakeChat {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_send: bool,
    pub fail_resolve: bool,
}

impl FakeChat {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, s: Sent) -> Result<(), TelegramError> {
        if self.fail_send {
            return Err(TelegramError::APIResponseError("Forbidden: bot was blocked".into()));
        }

        self.sent.lock().unwrap().push(s);
        Ok(())
    }
}

#[async_trait]
impl ChatGateway for FakeChat {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), TelegramError> {
        self.record(Sent::Text(chat, text.to_owned()))
    }

    async fn send_choices(
        &self,
        chat: ChatId,
        prompt: &str,
        choices: &[Choice],
    ) -> Result<(), TelegramError> {
        self.record(Sent::Choices(chat, prompt.to_owned(), choices.to_vec()))
    }

    async fn edit_text(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
    ) -> Result<(), TelegramError> {
        self.record(Sent::Edit(chat, message, text.to_owned()))
    }

    async fn acknowledge(&self, press_id: &str) -> Result<(), TelegramError> {
        self.record(Sent::Ack(press_id.to_owned()))
    }

    async fn resolve_photo(&self, file_id: &str) -> Result<Url, TelegramError> {
        if self.fail_resolve {
            return Err(TelegramError::MissingFilePath(file_id.to_owned()));
        }

        Ok(Url::parse(&format!("https://files.example/{}.jpg", file_id))?)
    }
}

#[derive(Default)]
pub struct FakeWorkspace {
    pub pages: Vec<Candidate>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub created: Mutex<Vec<(DestinationId, ContentItem)>>,
    pub create_attempts: Mutex<usize>,
}

impl FakeWorkspace {
    pub fn with_pages(pages: Vec<Candidate>) -> Self {
        FakeWorkspace {
            pages,
            ..FakeWorkspace::default()
        }
    }

    pub fn failing_create() -> Self {
        FakeWorkspace {
            fail_create: true,
            ..FakeWorkspace::default()
        }
    }

    pub fn created(&self) -> Vec<(DestinationId, ContentItem)> {
        self.created.lock().unwrap().clone()
    }

    pub fn create_attempts(&self) -> usize {
        *self.create_attempts.lock().unwrap()
    }
}

/// A real Notion client pointed at a server that accepts connections but
/// never answers, so every call runs into `timeout`.
pub async fn silent_workspace(timeout: Duration) -> NotionClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/v1", listener.local_addr().unwrap());

    tokio::spawn(async move {
        // Hold each connection open without reading from it.
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
    NotionClient::new(http, base, NotionToken("secret_x".into()))
}

fn simulated() -> NotionError {
    NotionError::APIResponseError {
        status: 502,
        code: "service_unavailable".into(),
        message: "simulated".into(),
    }
}

#[async_trait]
impl Workspace for FakeWorkspace {
    async fn list_pages(&self) -> Result<Vec<Candidate>, NotionError> {
        if self.fail_list {
            return Err(simulated());
        }

        Ok(self.pages.clone())
    }

    async fn create_page(
        &self,
        parent: &DestinationId,
        item: &ContentItem,
    ) -> Result<(), NotionError> {
        *self.create_attempts.lock().unwrap() += 1;

        if self.fail_create {
            return Err(simulated());
        }

        self.created
            .lock()
            .unwrap()
            .push((parent.clone(), item.clone()));
        Ok(())
    }
}
