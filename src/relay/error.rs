use super::text;
use crate::{notion::NotionError, telegram::TelegramError};
use std::fmt;
use tracing::{error, warn};

/// What the user was trying to save when creation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Photo,
}

/// Why a page couldn't be created.
#[derive(Debug)]
pub enum CreateFailure {
    /// The photo couldn't be resolved to a URL.
    Photo(TelegramError),
    Workspace(NotionError),
}

/// Sum type representing every recoverable fail state of the relay.
#[derive(Debug)]
pub enum RelayError {
    RemoteList(NotionError),
    NoDestinationSelected,
    RemoteCreate(ContentKind, CreateFailure),
    /// A reply couldn't be delivered, so there's no one left to tell.
    Reply(TelegramError),
}

impl RelayError {
    /// The fixed message shown to the user, if any. The underlying cause is
    /// never included.
    pub fn reply_text(&self) -> Option<&'static str> {
        match self {
            RelayError::RemoteList(_) => Some(text::LIST_FAILED),
            RelayError::NoDestinationSelected => Some(text::SELECT_FIRST),
            RelayError::RemoteCreate(ContentKind::Text, _) => Some(text::PAGE_FAILED),
            RelayError::RemoteCreate(ContentKind::Photo, _) => Some(text::IMAGE_FAILED),
            RelayError::Reply(_) => None,
        }
    }

    /// Log with the full cause. User mistakes are only warnings.
    pub fn log(&self) {
        match self {
            RelayError::NoDestinationSelected => warn!("{}", self),
            _ => error!("{}", self),
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            RelayError::RemoteList(e) => format!("Failed to list pages: {}", e),
            RelayError::NoDestinationSelected => "No destination selected".into(),
            RelayError::RemoteCreate(_, CreateFailure::Photo(e)) => {
                format!("Failed to resolve photo: {}", e)
            }
            RelayError::RemoteCreate(_, CreateFailure::Workspace(e)) => {
                format!("Failed to create page: {}", e)
            }
            RelayError::Reply(e) => format!("Failed to reply: {}", e),
        };

        write!(f, "{}", x)
    }
}
