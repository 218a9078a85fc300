//! A small client for the Telegram Bot API, covering what the relay needs:
//! receiving updates (by webhook or long polling), replying with text and
//! inline keyboards, and resolving photos to downloadable URLs.
//!
//! See [update::Update] for the inbound side.

pub mod api;
pub mod auth;
pub mod error;
mod file;
mod keyboard;
mod message;
pub mod poll;
pub mod router;
pub mod update;
pub mod webhook;

pub use api::TelegramClient;
pub use error::TelegramError;
pub use keyboard::{InlineKeyboardButton, InlineKeyboardMarkup};
