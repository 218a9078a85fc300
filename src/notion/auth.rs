//! Notion's integrations authenticate with a bearer token.

use std::fmt;

/// A newtype wrapper around Notion integration tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct NotionToken(pub String);

impl fmt::Debug for NotionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NotionToken(..)")
    }
}

/// Convert a Notion token to a `Bearer` `Authorization` header value.
///
/// ```
/// let token = NotionToken("secret_foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer secret_foo");
/// ```
pub fn to_auth_header_val(t: &NotionToken) -> String {
    format!("Bearer {}", t.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_auth_header_val() {
        let token = NotionToken("secret_foo".into());
        assert_eq!(to_auth_header_val(&token), "Bearer secret_foo");
    }
}
