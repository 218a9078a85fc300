//! Create pages beneath an existing page.

use super::{
    api::{decode, NotionClient},
    block::{Block, TextContent},
    error::NotionError,
};
use serde::{Deserialize, Serialize};

/// Notion object IDs are UUIDs, with or without dashes. We pass them through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageId(pub String);

/// <https://developers.notion.com/reference/post-page>
#[derive(Serialize)]
struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: TitleProperties<'a>,
    children: [&'a Block<'a>; 1],
}

#[derive(Serialize)]
struct Parent<'a> {
    page_id: &'a PageId,
}

/// Pages beneath other pages have exactly one property, their title.
#[derive(Serialize)]
struct TitleProperties<'a> {
    title: Title<'a>,
}

#[derive(Serialize)]
struct Title<'a> {
    title: [TitleText<'a>; 1],
}

#[derive(Serialize)]
struct TitleText<'a> {
    text: TextContent<'a>,
}

#[derive(Deserialize)]
struct CreatePageResponse {
    id: PageId,
}

impl NotionClient {
    /// Create a page titled `title` beneath `parent`, holding a single block.
    pub async fn post_page(
        &self,
        parent: &PageId,
        title: &str,
        block: &Block<'_>,
    ) -> Result<PageId, NotionError> {
        let res = self
            .post("/pages")
            .json(&CreatePageRequest {
                parent: Parent { page_id: parent },
                properties: TitleProperties {
                    title: Title {
                        title: [TitleText {
                            text: TextContent { content: title },
                        }],
                    },
                },
                children: [block],
            })
            .send()
            .await?;

        let page: CreatePageResponse = decode(res).await?;
        Ok(page.id)
    }
}
