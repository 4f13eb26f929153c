//! Client-side peek at access-token claims.
//!
//! The payload is read without verifying the signature: it only drives what
//! the UI shows and whether a stored token is worth sending. The backend
//! remains the authority on every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::Value;

/// Claims the client cares about. Unknown claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(default, deserialize_with = "string_or_number")]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Expiry in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "seconds")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Best label for the user.
    ///
    /// Priority: `nickname`, `preferred_username`, `name`, `username`, `email`, `sub`.
    pub fn display_name(&self) -> Option<&str> {
        [
            &self.nickname,
            &self.preferred_username,
            &self.name,
            &self.username,
            &self.email,
            &self.sub,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|s| !s.trim().is_empty())
    }

    /// A token without `exp` never expires client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// Accepts an optional `Bearer ` prefix and base64url with or without
/// padding. Any malformation yields `None`.
pub fn decode_token(raw: &str) -> Option<Claims> {
    let token = raw.trim();
    let token = token.rsplit(' ').next().unwrap_or(token);
    let mut parts = token.split('.');
    let (_header, payload) = (parts.next()?, parts.next()?);
    if payload.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
