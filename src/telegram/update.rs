//! Inbound updates, and their translation into relay [Event]s.
//!
//! Only the fields we act upon are decoded; everything else Telegram sends is
//! ignored.
//!
//! <https://core.telegram.org/bots/api#update>

use crate::relay::{
    event::{Command, Event, Press},
    model::{ChatId, Conversation, MessageId, PhotoRef, UserId},
};
use regex::Regex;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    message: Option<Message>,
    callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Deserialize)]
struct Message {
    /// Absent for posts in channels.
    from: Option<User>,
    chat: Chat,
    text: Option<String>,
    caption: Option<String>,
    /// Every available size of a photo, smallest first.
    photo: Option<Vec<PhotoSize>>,
}

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
    #[serde(default)]
    first_name: String,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct PhotoSize {
    file_id: String,
    width: u32,
    height: u32,
}

/// <https://core.telegram.org/bots/api#callbackquery>
#[derive(Debug, Deserialize)]
struct CallbackQuery {
    id: String,
    from: User,
    /// Only the fields common to accessible and inaccessible messages.
    message: Option<CallbackMessage>,
    data: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallbackMessage {
    message_id: i64,
    chat: Chat,
}

impl Update {
    /// The event this update represents, if it's one the relay handles.
    pub fn into_event(self) -> Option<Event> {
        if let Some(q) = self.callback_query {
            return Some(Event::Press {
                user: UserId(q.from.id),
                data: q.data.unwrap_or_default(),
                press: Press {
                    id: q.id,
                    origin: q
                        .message
                        .map(|m| (ChatId(m.chat.id), MessageId(m.message_id))),
                },
            });
        }

        let msg = self.message?;
        let from = msg.from?;
        let conv = Conversation {
            user: UserId(from.id),
            chat: ChatId(msg.chat.id),
        };

        if let Some(photo) = msg.photo.as_deref().and_then(largest) {
            return Some(Event::Photo {
                conv,
                photo,
                caption: msg.caption.filter(|c| !c.is_empty()),
            });
        }

        let text = msg.text?;
        if text.starts_with('/') {
            return parse_command(&text, from.first_name).map(|cmd| Event::Command(conv, cmd));
        }

        Some(Event::Text(conv, text))
    }
}

/// The largest resolution on offer. Telegram lists sizes in ascending order,
/// but nothing promises it.
fn largest(sizes: &[PhotoSize]) -> Option<PhotoRef> {
    sizes
        .iter()
        .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
        .map(|p| PhotoRef {
            file_id: p.file_id.clone(),
        })
}

/// Decode a command such as `/notion buy milk`, or `/help@some_bot` in group
/// chats. Unknown commands decode to nothing.
fn parse_command(text: &str, first_name: String) -> Option<Command> {
    let caps = Regex::new(r"^/(?P<name>[A-Za-z0-9_]+)(?:@\S+)?(?P<args>(?s:\s.*))?$")
        .ok()
        .and_then(|re| re.captures(text))?;

    let name = caps.name("name")?.as_str();
    let args: Vec<String> = caps
        .name("args")
        .map(|m| m.as_str().split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default();

    match name {
        "start" => Some(Command::Start { first_name }),
        "help" => Some(Command::Help),
        "change_page" => Some(Command::ChangePage),
        "notion" => Some(Command::Notion { args }),
        _ => None,
    }
}
