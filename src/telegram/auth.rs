//! Bot tokens and the shared secret Telegram echoes back on webhook requests.
//!
//! When registering a webhook we hand Telegram a secret, which it then
//! includes in a header on every update it delivers. Requests without it, or
//! with a different value, didn't come from Telegram.
//!
//! <https://core.telegram.org/bots/api#setwebhook>

use std::fmt;

/// The header in which Telegram supplies the webhook secret.
pub const SECRET_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// A newtype wrapper around the bot token issued by BotFather.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(pub String);

/// Tokens end up in request paths, so keep them out of any `Debug` output.
impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BotToken(..)")
    }
}

/// A newtype wrapper around the webhook secret.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookSecret(pub String);

impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WebhookSecret(..)")
    }
}

/// Compare our secret against that offered alongside a request. Requests
/// which fail this predicate, or which don't offer a secret at all, should be
/// considered unauthenticated.
pub fn is_valid_secret(secret: &WebhookSecret, offered: Option<&str>) -> bool {
    offered == Some(secret.0.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_secret() {
        let secret = WebhookSecret(String::from("s3cr3t_value-1"));

        assert!(is_valid_secret(&secret, Some("s3cr3t_value-1")));
        assert!(!is_valid_secret(&secret, Some("s3cr3t_value-2")));
        assert!(!is_valid_secret(&secret, Some("")));
        assert!(!is_valid_secret(&secret, None));
    }

    #[test]
    fn test_debug_hides_values() {
        let token = BotToken(String::from("123:abc"));
        assert_eq!(format!("{:?}", token), "BotToken(..)");

        let secret = WebhookSecret(String::from("hush"));
        assert_eq!(format!("{:?}", secret), "WebhookSecret(..)");
    }
}
