//! Identifiers and values passed between the relay and its collaborators.

use std::fmt;
use url::Url;

/// Placeholder for pages without a usable title.
pub const UNTITLED: &str = "Untitled";

/// Page titles are cut to this many characters on buttons.
pub const MAX_TITLE_CHARS: usize = 20;

/// A Telegram user, as assigned by Telegram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// The chat replies go to. For private chats this equals the user's ID, but
/// we don't rely on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageId(pub i64);

/// A Notion page new content can be created beneath.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationId(pub String);

macro_rules! display_inner {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

display_inner!(UserId, ChatId, MessageId, DestinationId);

/// Who an event came from and where to reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversation {
    pub user: UserId,
    pub chat: ChatId,
}

/// A page as the workspace lists it, before any display concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: DestinationId,
    pub title: Option<String>,
}

/// A page as offered to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub id: DestinationId,
    pub title: String,
}

/// Titles are truncated by character, never by byte, so that multibyte
/// titles can't be split mid-character. Blank titles become [UNTITLED];
/// others are kept as written, surrounding whitespace included.
impl From<Candidate> for Destination {
    fn from(c: Candidate) -> Self {
        let title = match c.title {
            Some(t) if !t.trim().is_empty() => t.chars().take(MAX_TITLE_CHARS).collect(),
            _ => UNTITLED.to_owned(),
        };

        Destination { id: c.id, title }
    }
}

/// One selectable button: what the user sees, and what's echoed back to us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub data: String,
}

/// The largest available resolution of an inbound photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    pub file_id: String,
}

/// What gets written to the workspace for one inbound message. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Text { title: String, body: String },
    Photo { caption: String, image_url: Url },
}

impl ContentItem {
    /// The first line becomes the title and any remaining lines the body.
    pub fn from_text(raw: &str) -> Self {
        let mut lines = raw.split('\n');
        let title = lines.next().unwrap_or_default().to_owned();
        let body = lines.collect::<Vec<_>>().join("\n");

        ContentItem::Text { title, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: Option<&str>) -> Candidate {
        Candidate {
            id: DestinationId("p".into()),
            title: title.map(str::to_owned),
        }
    }

    #[test]
    fn test_placeholder_title() {
        assert_eq!(Destination::from(candidate(None)).title, UNTITLED);
        assert_eq!(Destination::from(candidate(Some(""))).title, UNTITLED);
        assert_eq!(Destination::from(candidate(Some("  "))).title, UNTITLED);
    }

    #[test]
    fn test_truncated_title() {
        let d = Destination::from(candidate(Some("Meeting notes for the quarterly review")));
        assert_eq!(d.title, "Meeting notes for th");

        let d = Destination::from(candidate(Some("Заметки о путешествии по Италии")));
        assert_eq!(d.title, "Заметки о путешестви");

        let d = Destination::from(candidate(Some("  Weekly planning and goals")));
        assert_eq!(d.title, "  Weekly planning an");
    }

    quickcheck! {
        fn prop_title_never_empty_or_long(title: Option<String>) -> bool {
            let d = Destination::from(Candidate { id: DestinationId("p".into()), title });
            !d.title.is_empty() && d.title.chars().count() <= MAX_TITLE_CHARS
        }
    }

    #[test]
    fn test_from_text() {
        assert_eq!(
            ContentItem::from_text("Title\nLine1\nLine2"),
            ContentItem::Text {
                title: "Title".into(),
                body: "Line1\nLine2".into(),
            }
        );

        assert_eq!(
            ContentItem::from_text("Title only"),
            ContentItem::Text {
                title: "Title only".into(),
                body: String::new(),
            }
        );

        assert_eq!(
            ContentItem::from_text("Title\n\nafter a gap\n"),
            ContentItem::Text {
                title: "Title".into(),
                body: "\nafter a gap\n".into(),
            }
        );
    }
}
