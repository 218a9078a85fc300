//! Resolve uploaded files, such as photos, to URLs others can fetch.

use super::{api::TelegramClient, error::TelegramError};
use serde::{Deserialize, Serialize};
use url::Url;

/// <https://core.telegram.org/bots/api#getfile>
#[derive(Serialize)]
struct GetFileRequest<'a> {
    file_id: &'a str,
}

/// <https://core.telegram.org/bots/api#file>
#[derive(Deserialize)]
struct File {
    file_path: Option<String>,
}

impl TelegramClient {
    /// Look up a file and build its download URL. The URL stays valid for at
    /// least an hour.
    pub async fn resolve_file_url(&self, file_id: &str) -> Result<Url, TelegramError> {
        let file: File = self.call("getFile", &GetFileRequest { file_id }).await?;

        let path = file
            .file_path
            .ok_or_else(|| TelegramError::MissingFilePath(file_id.to_owned()))?;

        Ok(self.file_url(&path)?)
    }
}
