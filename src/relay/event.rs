//! Inbound events, independent of how the chat platform encodes them.

use super::model::{ChatId, Conversation, MessageId, PhotoRef, UserId};

/// Commands the bot understands. Anything else starting with a slash is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { first_name: String },
    Help,
    ChangePage,
    /// `/notion some text`, with the text split on whitespace.
    Notion { args: Vec<String> },
}

/// A button press, which must be acknowledged whatever it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Press {
    pub id: String,
    /// The message carrying the button. Telegram omits it for messages that
    /// are too old.
    pub origin: Option<(ChatId, MessageId)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Command(Conversation, Command),
    Text(Conversation, String),
    Photo {
        conv: Conversation,
        photo: PhotoRef,
        caption: Option<String>,
    },
    Press {
        user: UserId,
        data: String,
        press: Press,
    },
}

impl Event {
    /// A short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Command(_, Command::Start { .. }) => "start",
            Event::Command(_, Command::Help) => "help",
            Event::Command(_, Command::ChangePage) => "change_page",
            Event::Command(_, Command::Notion { .. }) => "notion",
            Event::Text(..) => "text",
            Event::Photo { .. } => "photo",
            Event::Press { .. } => "press",
        }
    }

    pub fn user(&self) -> UserId {
        match self {
            Event::Command(conv, _) | Event::Text(conv, _) | Event::Photo { conv, .. } => conv.user,
            Event::Press { user, .. } => *user,
        }
    }
}
