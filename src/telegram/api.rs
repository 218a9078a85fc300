//! Type definitions and helpers for the Telegram Bot API.

use super::{auth::BotToken, error::TelegramError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

/// The base URL of the Telegram Bot API.
pub const API_BASE: &str = "https://api.telegram.org";

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client]. Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base: String,
    token: BotToken,
}

impl TelegramClient {
    pub fn new(http: reqwest::Client, base: String, token: BotToken) -> Self {
        TelegramClient { http, base, token }
    }

    /// Create a POST request to any Bot API method. The bot token is part of
    /// the path rather than a header.
    pub(super) fn post(&self, method: &str) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}/bot{}/{}", self.base, self.token.0, method))
    }

    /// Call a Bot API method with JSON parameters, unwrapping the result
    /// envelope.
    pub(super) async fn call<P, T>(&self, method: &str, params: &P) -> Result<T, TelegramError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_with(self.post(method).json(params)).await
    }

    /// As [Self::call] but for an already built request, for example one with
    /// a custom timeout.
    pub(super) async fn call_with<T>(&self, req: reqwest::RequestBuilder) -> Result<T, TelegramError>
    where
        T: DeserializeOwned,
    {
        let res: APIResult<T> = req.send().await?.json().await?;

        match res {
            APIResult::Ok(res) => Ok(res.result),
            APIResult::Err(res) => Err(TelegramError::APIResponseError(res.description)),
        }
    }

    /// Build the download URL for a file previously looked up via `getFile`.
    ///
    /// ```
    /// // https://api.telegram.org/file/bot<token>/photos/file_0.jpg
    /// client.file_url("photos/file_0.jpg")
    /// ```
    pub(super) fn file_url(&self, file_path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}/file/bot{}/{}",
            self.base, self.token.0, file_path
        ))
    }
}

/// The Bot API wraps every response in a common envelope, representing
/// whether a request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "result": {}
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error_code": 401,
///     "description": "Unauthorized"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(OkResponse<T>),
    Err(ErrorResponse),
}

/// The universal response in case of a successful request.
// `ok` is checked on both sides so that an error response can never be taken
// for a success whose `result` happens to be optional.
#[derive(Deserialize)]
pub struct OkResponse<T> {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    pub result: T,
}

/// The universal response in case of an unsuccessful request.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub description: String,
}
