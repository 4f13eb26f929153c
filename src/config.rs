//! Backend connection settings.
//!
//! The base URL is fixed at build time from `FOODTHING_API_BASE`. Production
//! builds point it at the absolute API origin; development builds leave it
//! unset and go through the same-origin `/api` proxy.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const ACCESS_TOKEN_STORAGE_KEY: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; paths are appended verbatim.
    pub base_url: String,
    /// Client-side timeout applied to every request.
    pub timeout: Duration,
    /// Name of the script-readable cookie that may carry the access token.
    pub cookie_name: String,
    /// `localStorage` key holding the bearer token returned in response bodies.
    pub storage_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_owned(),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            cookie_name: ACCESS_TOKEN_COOKIE.to_owned(),
            storage_key: ACCESS_TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Build config from `FOODTHING_API_BASE` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("FOODTHING_API_BASE"))
    }

    /// Build config from an optional raw base URL, falling back to the proxy path.
    pub fn with_base(raw: Option<&str>) -> Self {
        Self { base_url: normalize_base_url(raw), ..Self::default() }
    }

    /// Join `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

pub fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
