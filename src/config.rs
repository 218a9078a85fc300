//! Process configuration, read from the environment at startup.
//!
//! | Variable              | Default | Meaning                                  |
//! |-----------------------|---------|------------------------------------------|
//! | `TELEGRAM_TOKEN`      |         | Bot API token. Required.                 |
//! | `NOTION_TOKEN`        |         | Notion integration token. Required.      |
//! | `PORT`                | 80      | Port for the health check and webhook.   |
//! | `WEBHOOK_URL`         |         | Public URL of `/api/v1/telegram`.        |
//! | `WEBHOOK_SECRET`      |         | Required alongside `WEBHOOK_URL`.        |
//! | `REMOTE_TIMEOUT_SECS` | 10      | Bound on every call to Telegram/Notion.  |
//!
//! Without `WEBHOOK_URL` updates are fetched by long polling.

use crate::{
    notion::auth::NotionToken,
    telegram::auth::{BotToken, WebhookSecret},
};
use regex::Regex;
use std::{env, fmt, time::Duration};
use url::Url;

const DEFAULT_PORT: u16 = 80;
const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Config {
    pub telegram_token: BotToken,
    pub notion_token: NotionToken,
    pub port: u16,
    pub webhook: Option<Webhook>,
    pub remote_timeout: Duration,
}

pub struct Webhook {
    pub url: Url,
    pub secret: WebhookSecret,
}

/// Every way configuration can be unusable. All of them are fatal.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            ConfigError::Missing(key) => format!("Missing ${} environment variable", key),
            ConfigError::Invalid { key, value } => format!("Could not parse ${}: {:?}", key, value),
        };

        write!(f, "{}", x)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any source of variables. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let telegram_token = BotToken(require("TELEGRAM_TOKEN")?);
        let notion_token = NotionToken(require("NOTION_TOKEN")?);

        let port = match get("PORT") {
            Some(x) => parse("PORT", x)?,
            None => DEFAULT_PORT,
        };

        let remote_timeout = match get("REMOTE_TIMEOUT_SECS") {
            Some(x) => match parse::<u64>("REMOTE_TIMEOUT_SECS", x.clone())? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: "REMOTE_TIMEOUT_SECS",
                        value: x,
                    })
                }
                secs => Duration::from_secs(secs),
            },
            None => DEFAULT_REMOTE_TIMEOUT,
        };

        let webhook = match get("WEBHOOK_URL") {
            Some(raw) => {
                let url = Url::parse(&raw).map_err(|_| ConfigError::Invalid {
                    key: "WEBHOOK_URL",
                    value: raw.clone(),
                })?;
                let secret = require("WEBHOOK_SECRET")?;

                if !is_valid_secret_format(&secret) {
                    // Shown redacted, as the error is logged.
                    return Err(ConfigError::Invalid {
                        key: "WEBHOOK_SECRET",
                        value: "..".into(),
                    });
                }

                Some(Webhook {
                    url,
                    secret: WebhookSecret(secret),
                })
            }
            None => None,
        };

        Ok(Config {
            telegram_token,
            notion_token,
            port,
            webhook,
            remote_timeout,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

/// Telegram only accepts 1-256 characters of `A-Z`, `a-z`, `0-9`, `_` and `-`.
fn is_valid_secret_format(secret: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9_-]{1,256}$")
        .map(|re| re.is_match(secret))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| map.get(key).cloned())
    }

    const TOKENS: [(&str, &str); 2] = [("TELEGRAM_TOKEN", "123:abc"), ("NOTION_TOKEN", "secret_x")];

    #[test]
    fn test_defaults() {
        let c = config(&TOKENS).unwrap();

        assert_eq!(c.telegram_token, BotToken("123:abc".into()));
        assert_eq!(c.notion_token, NotionToken("secret_x".into()));
        assert_eq!(c.port, 80);
        assert_eq!(c.remote_timeout, Duration::from_secs(10));
        assert!(c.webhook.is_none());
    }

    #[test]
    fn test_missing_tokens() {
        assert_eq!(
            config(&[("NOTION_TOKEN", "secret_x")]).err(),
            Some(ConfigError::Missing("TELEGRAM_TOKEN"))
        );
        assert_eq!(
            config(&[("TELEGRAM_TOKEN", "123:abc")]).err(),
            Some(ConfigError::Missing("NOTION_TOKEN"))
        );
        assert_eq!(
            config(&[("TELEGRAM_TOKEN", "123:abc"), ("NOTION_TOKEN", "")]).err(),
            Some(ConfigError::Missing("NOTION_TOKEN"))
        );
    }

    #[test]
    fn test_overrides() {
        let mut vars = TOKENS.to_vec();
        vars.push(("PORT", "8080"));
        vars.push(("REMOTE_TIMEOUT_SECS", "3"));
        vars.push(("WEBHOOK_URL", "https://relay.example/api/v1/telegram"));
        vars.push(("WEBHOOK_SECRET", "hush_hush-1"));

        let c = config(&vars).unwrap();
        let hook = c.webhook.unwrap();

        assert_eq!(c.port, 8080);
        assert_eq!(c.remote_timeout, Duration::from_secs(3));
        assert_eq!(hook.url.as_str(), "https://relay.example/api/v1/telegram");
        assert_eq!(hook.secret, WebhookSecret("hush_hush-1".into()));
    }

    #[test]
    fn test_invalid_values() {
        let with = |extra: &[(&'static str, &'static str)]| {
            let mut vars = TOKENS.to_vec();
            vars.extend_from_slice(extra);
            config(&vars).err()
        };

        assert_eq!(
            with(&[("PORT", "eighty")]),
            Some(ConfigError::Invalid {
                key: "PORT",
                value: "eighty".into()
            })
        );
        assert_eq!(
            with(&[("REMOTE_TIMEOUT_SECS", "0")]),
            Some(ConfigError::Invalid {
                key: "REMOTE_TIMEOUT_SECS",
                value: "0".into()
            })
        );
        assert_eq!(
            with(&[("WEBHOOK_URL", "https://relay.example")]),
            Some(ConfigError::Missing("WEBHOOK_SECRET"))
        );
        assert_eq!(
            with(&[
                ("WEBHOOK_URL", "https://relay.example"),
                ("WEBHOOK_SECRET", "no spaces allowed")
            ]),
            Some(ConfigError::Invalid {
                key: "WEBHOOK_SECRET",
                value: "..".into()
            })
        );
        assert_eq!(
            with(&[("WEBHOOK_URL", "not a url"), ("WEBHOOK_SECRET", "ok")]),
            Some(ConfigError::Invalid {
                key: "WEBHOOK_URL",
                value: "not a url".into()
            })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::Missing("NOTION_TOKEN").to_string(),
            "Missing $NOTION_TOKEN environment variable"
        );
    }

    #[test]
    fn test_invalid_secret_not_shown() {
        let mut vars = TOKENS.to_vec();
        vars.push(("WEBHOOK_URL", "https://relay.example"));
        vars.push(("WEBHOOK_SECRET", "hush hush"));

        let msg = config(&vars).err().unwrap().to_string();

        assert_eq!(msg, r#"Could not parse $WEBHOOK_SECRET: "..""#);
        assert!(!msg.contains("hush"));
    }
}
