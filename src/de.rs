//! Deserialisation helpers shared by the API clients.

use serde::de::{Deserialize, Deserializer, Error};

/// Accept a bool only if it's `expected`. Useful to steer `#[serde(untagged)]`
/// enums, which otherwise pick the first variant whose fields happen to fit.
fn exactly<'a, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    let b = bool::deserialize(deserializer)?;

    if b == expected {
        Ok(b)
    } else {
        Err(Error::custom(format!("invalid bool: {}", b)))
    }
}

pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, true)
}

pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, false)
}
