use std::fmt;

/// Sum type representing every possible unexceptional fail state when talking
/// to the Bot API.
#[derive(Debug)]
pub enum TelegramError {
    APIRequestFailed(reqwest::Error),
    APIResponseError(String),
    /// `getFile` succeeded but the file can't be downloaded, which Telegram
    /// does for anything larger than 20MB.
    MissingFilePath(String),
    InvalidFileUrl(url::ParseError),
}

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        TelegramError::APIRequestFailed(e)
    }
}

impl From<url::ParseError> for TelegramError {
    fn from(e: url::ParseError) -> Self {
        TelegramError::InvalidFileUrl(e)
    }
}

impl fmt::Display for TelegramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            TelegramError::APIRequestFailed(e) => {
                format!("Telegram API request failed: {}", redacted(e))
            }
            TelegramError::APIResponseError(e) => format!("Telegram API returned error: {}", e),
            TelegramError::MissingFilePath(id) => format!("Telegram file not downloadable: {}", id),
            TelegramError::InvalidFileUrl(e) => format!("Invalid Telegram file URL: {}", e),
        };

        write!(f, "{}", x)
    }
}

/// Describe a request failure without its URL, which embeds the bot token.
fn redacted(e: &reqwest::Error) -> String {
    let kind = if e.is_timeout() {
        "timed out"
    } else if e.is_connect() {
        "could not connect"
    } else if e.is_decode() {
        "could not decode response"
    } else {
        "failed"
    };

    match e.status() {
        Some(status) => format!("{} ({})", kind, status),
        None => kind.to_owned(),
    }
}
