use std::fmt;

/// Sum type representing every possible unexceptional fail state when talking
/// to the Notion API.
#[derive(Debug)]
pub enum NotionError {
    APIRequestFailed(reqwest::Error),
    APIResponseError {
        status: u16,
        code: String,
        message: String,
    },
}

impl From<reqwest::Error> for NotionError {
    fn from(e: reqwest::Error) -> Self {
        NotionError::APIRequestFailed(e)
    }
}

impl fmt::Display for NotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            NotionError::APIRequestFailed(e) => format!("Notion API request failed: {}", e),
            NotionError::APIResponseError {
                status,
                code,
                message,
            } => format!("Notion API returned error {} ({}): {}", status, code, message),
        };

        write!(f, "{}", x)
    }
}
