//! List the pages shared with the integration.

use super::{
    api::{decode, NotionClient},
    error::NotionError,
    page::PageId,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

/// <https://developers.notion.com/reference/post-search>
#[derive(Serialize)]
struct SearchRequest {
    filter: SearchFilter,
    /// Maximum supported. We make a single pass, so anything beyond the first
    /// page of results isn't offered.
    page_size: u8,
}

#[derive(Serialize)]
struct SearchFilter {
    property: &'static str,
    value: &'static str,
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<PageMeta>,
}

/// The metadata we care about per-page within [SearchResponse].
#[derive(Deserialize)]
struct PageMeta {
    id: PageId,
    #[serde(default)]
    properties: Properties,
}

/// Pages beneath other pages call their title property `title`. Pages in
/// databases can name it anything, in which case it's treated as missing.
#[derive(Default, Deserialize)]
struct Properties {
    #[serde(default)]
    title: Option<TitleProperty>,
}

#[derive(Deserialize)]
struct TitleProperty {
    /// Absent when the property isn't of type `title`.
    #[serde(default)]
    title: Vec<RichText>,
}

#[serde_as]
#[derive(Deserialize)]
struct RichText {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    plain_text: Option<String>,
}

/// A page as found by search. The title is the first fragment of its title
/// property, if there's one with any text.
#[derive(Debug, PartialEq, Eq)]
pub struct FoundPage {
    pub id: PageId,
    pub title: Option<String>,
}

impl From<PageMeta> for FoundPage {
    fn from(meta: PageMeta) -> Self {
        let title = meta
            .properties
            .title
            .and_then(|p| p.title.into_iter().next())
            .and_then(|t| t.plain_text);

        FoundPage { id: meta.id, title }
    }
}

impl NotionClient {
    /// Find every page shared with the integration, in the order Notion
    /// returns them.
    pub async fn find_pages(&self) -> Result<Vec<FoundPage>, NotionError> {
        let res = self
            .post("/search")
            .json(&SearchRequest {
                filter: SearchFilter {
                    property: "object",
                    value: "page",
                },
                page_size: 100,
            })
            .send()
            .await?;

        let body: SearchResponse = decode(res).await?;
        Ok(body.results.into_iter().map(FoundPage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::auth::NotionToken;
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(base: String) -> NotionClient {
        NotionClient::new(reqwest::Client::new(), base, NotionToken("secret_x".into()))
    }

    #[tokio::test]
    async fn test_find_pages() {
        let search_res = r#"{
            "object": "list",
            "results": [
                {
                    "object": "page",
                    "id": "a",
                    "properties": {
                        "title": {
                            "id": "title",
                            "type": "title",
                            "title": [{ "type": "text", "plain_text": "Inbox" }]
                        }
                    }
                },
                {
                    "object": "page",
                    "id": "b",
                    "properties": {
                        "title": { "id": "title", "type": "title", "title": [] }
                    }
                },
                {
                    "object": "page",
                    "id": "c",
                    "properties": {
                        "Name": { "id": "title", "type": "title", "title": [] }
                    }
                },
                {
                    "object": "page",
                    "id": "d",
                    "properties": {
                        "title": { "type": "title", "title": [{ "plain_text": "" }] }
                    }
                },
                { "object": "page", "id": "e" }
            ],
            "next_cursor": null,
            "has_more": false
        }"#;

        let mut srv = mockito::Server::new_async().await;

        let mock = srv
            .mock("POST", "/search")
            .match_header("authorization", "Bearer secret_x")
            .match_body(Matcher::PartialJson(json!({
                "filter": { "property": "object", "value": "page" }
            })))
            .with_body(search_res)
            .create_async()
            .await;

        let pages = client(srv.url()).find_pages().await.unwrap();

        mock.assert_async().await;

        let page = |id: &str, title: Option<&str>| FoundPage {
            id: PageId(id.into()),
            title: title.map(str::to_owned),
        };
        assert_eq!(
            pages,
            vec![
                page("a", Some("Inbox")),
                page("b", None),
                page("c", None),
                page("d", None),
                page("e", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_pages_unauthorized() {
        let mut srv = mockito::Server::new_async().await;

        let mock = srv
            .mock("POST", "/search")
            .with_status(401)
            .with_body(
                r#"{"object": "error", "status": 401, "code": "unauthorized", "message": "API token is invalid."}"#,
            )
            .create_async()
            .await;

        let res = client(srv.url()).find_pages().await;

        mock.assert_async().await;
        assert!(matches!(
            res,
            Err(NotionError::APIResponseError { status: 401, .. })
        ));
    }
}
