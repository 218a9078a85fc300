use serde::ser::SerializeStruct;
use serde::{ser, Serialize};
use url::Url;

/// Notion pages are made of blocks. This is our limited subset thereof: a
/// page holds exactly one of these.
///
/// <https://developers.notion.com/reference/block>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Plain, unformatted text.
    Paragraph(&'a str),
    /// An image hosted elsewhere, which Notion fetches itself.
    ExternalImage(&'a Url),
}

/// <https://developers.notion.com/reference/rich-text>
#[derive(Serialize)]
struct RichText<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    text: TextContent<'a>,
}

#[derive(Serialize)]
pub(super) struct TextContent<'a> {
    pub content: &'a str,
}

#[derive(Serialize)]
struct Paragraph<'a> {
    rich_text: [RichText<'a>; 1],
}

#[derive(Serialize)]
struct ExternalFile<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    external: ExternalUrl<'a>,
}

#[derive(Serialize)]
struct ExternalUrl<'a> {
    url: &'a Url,
}

impl ser::Serialize for Block<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let mut state = serializer.serialize_struct("Block", 3)?;
        state.serialize_field("object", "block")?;

        match self {
            Block::Paragraph(content) => {
                state.serialize_field("type", "paragraph")?;

                let inner = Paragraph {
                    rich_text: [RichText {
                        typ: "text",
                        text: TextContent { content },
                    }],
                };
                state.serialize_field("paragraph", &inner)?;
            }

            Block::ExternalImage(url) => {
                state.serialize_field("type", "image")?;

                let inner = ExternalFile {
                    typ: "external",
                    external: ExternalUrl { url },
                };
                state.serialize_field("image", &inner)?;
            }
        };

        state.end()
    }
}
