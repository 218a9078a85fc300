//! Type definitions and helpers for the Notion API.

use super::{auth::*, error::NotionError};
use serde::{de::DeserializeOwned, Deserialize};

/// The base URL of the Notion API.
pub const API_BASE: &str = "https://api.notion.com/v1";

/// Notion versions its API by header. Responses are shaped by this version.
const NOTION_VERSION: &str = "2022-06-28";

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client].
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base: String,
    token: NotionToken,
}

impl NotionClient {
    pub fn new(http: reqwest::Client, base: String, token: NotionToken) -> Self {
        NotionClient { http, base, token }
    }

    /// Create a POST request to any Notion API endpoint, handling
    /// authentication and versioning.
    pub(super) fn post<T: ToString>(&self, path: T) -> reqwest::RequestBuilder {
        self.http
            .post(self.base.to_owned() + &path.to_string())
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(&self.token))
            .header("Notion-Version", NOTION_VERSION)
    }
}

/// Unlike Telegram there's no envelope; errors are signalled by
/// status code, with a body such as:
///
/// ```json
/// {
///     "object": "error",
///     "status": 401,
///     "code": "unauthorized",
///     "message": "API token is invalid."
/// }
/// ```
#[derive(Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

/// Decode a response body, or the error it carries instead.
pub(super) async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, NotionError> {
    let status = res.status();

    if status.is_success() {
        return Ok(res.json().await?);
    }

    // Proxies in front of Notion don't necessarily speak its error format.
    let body = res.text().await?;
    let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(e) => (e.code, e.message),
        Err(_) => (String::from("unknown"), body),
    };

    Err(NotionError::APIResponseError {
        status: status.as_u16(),
        code,
        message,
    })
}
