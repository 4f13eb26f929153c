//! Session resolution: who is logged in, and the login/logout round-trips.
//!
//! DESIGN
//! ======
//! `bootstrap` answers synchronously from the credential store so the first
//! render already knows whether to show protected screens. It only sees
//! script-readable credentials; a session carried purely by an HTTP-only
//! cookie is confirmed afterwards with `verify` (`GET /users/me`).
//!
//! ERROR HANDLING
//! ==============
//! `bootstrap` and `logout` never fail. A malformed or expired token degrades
//! to an anonymous session and is removed from the store. `login` reports a
//! rejected credential as `ApiError::Auth` whatever 4xx the backend chose.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde_json::{Value, json};

use super::client::{ApiRequest, HttpClient, RequestOptions, extract_token};
use super::credentials::CredentialStore;
use super::error::ApiError;
use super::normalize::pick_str;
use super::token::{Claims, decode_token};
use super::transport::Transport;

pub const LOGIN_PATH: &str = "/users/log-in";
pub const LOGOUT_PATH: &str = "/users/log-out";
pub const ME_PATH: &str = "/users/me";

const PROFILE_ID_KEYS: &[&str] = &["id", "user_id", "userId"];
const PROFILE_EMAIL_KEYS: &[&str] = &["email"];
const PROFILE_NAME_KEYS: &[&str] = &["nickname", "name", "username"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Token expiry in seconds since the Unix epoch, when known.
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            authenticated: true,
            user_id: claims.sub.clone(),
            email: claims.email.clone(),
            display_name: claims.display_name().map(str::to_owned),
            expires_at: claims.exp,
        }
    }

    /// Session confirmed by the backend's profile endpoint.
    pub fn from_profile(profile: &Value) -> Self {
        let email = pick_str(profile, PROFILE_EMAIL_KEYS);
        Self {
            authenticated: true,
            user_id: pick_str(profile, PROFILE_ID_KEYS),
            display_name: pick_str(profile, PROFILE_NAME_KEYS).or_else(|| email.clone()),
            email,
            expires_at: None,
        }
    }

    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_secs)
    }
}

/// Resolve the session from locally held credentials without touching the network.
///
/// Running it twice over the same store yields the same session.
pub fn bootstrap(store: &impl CredentialStore, now_secs: i64) -> Session {
    let Some(token) = store.current_token() else {
        return Session::anonymous();
    };
    match decode_token(&token) {
        Some(claims) if !claims.is_expired(now_secs) => Session::from_claims(&claims),
        Some(_) => {
            log::debug!("[session] stored token expired; clearing");
            store.clear();
            Session::anonymous()
        }
        None => {
            log::debug!("[session] stored token unreadable; clearing");
            store.clear();
            Session::anonymous()
        }
    }
}

/// Log in with email and password.
///
/// The session comes from the token's claims when a live token is readable
/// afterwards; otherwise the backend's profile endpoint decides.
///
/// # Errors
///
/// `ApiError::Auth` when the backend rejects the credentials, otherwise the
/// classified transport or server error.
pub async fn login<T: Transport, S: CredentialStore>(
    client: &HttpClient<T, S>,
    email: &str,
    password: &str,
    now_secs: i64,
) -> Result<Session, ApiError> {
    let call = ApiRequest::post(LOGIN_PATH)
        .json(json!({ "email": email, "password": password }))
        .without_refresh();
    let response = client.request(call, RequestOptions::default()).await.map_err(rejected_as_auth)?;

    // Cookie-only backends answer with an empty or token-less body.
    let body: Value = response.json().unwrap_or(Value::Null);
    if let Some(token) = extract_token(&body) {
        client.credentials().store_token(&token);
    }
    match client.credentials().current_token().as_deref().and_then(decode_token) {
        Some(claims) if !claims.is_expired(now_secs) => return Ok(Session::from_claims(&claims)),
        Some(_) => log::debug!("[session] token issued at login is already expired; asking the server"),
        None => {}
    }

    match verify(client).await {
        Ok(session) => Ok(session),
        Err(ApiError::Canceled) => Err(ApiError::Canceled),
        Err(err) => {
            log::debug!("[session] profile lookup after login failed: {err}");
            Ok(Session {
                authenticated: true,
                email: Some(email.to_owned()),
                display_name: Some(email.to_owned()),
                ..Session::anonymous()
            })
        }
    }
}

/// Ask the backend who the current session belongs to.
///
/// Runs without 401 recovery: an anonymous visitor has nothing to refresh.
///
/// # Errors
///
/// `ApiError::Auth` when no session is active server-side.
pub async fn verify<T: Transport, S: CredentialStore>(client: &HttpClient<T, S>) -> Result<Session, ApiError> {
    let profile: Value = client.fetch_json(ApiRequest::get(ME_PATH).without_refresh()).await?;
    if !profile.is_object() {
        return Err(ApiError::Decode("profile is not an object".to_owned()));
    }
    Ok(Session::from_profile(&profile))
}

/// Tell the backend to end the session, then drop local credentials regardless.
pub async fn logout<T: Transport, S: CredentialStore>(client: &HttpClient<T, S>) -> Session {
    let call = ApiRequest::post(LOGOUT_PATH).without_refresh();
    if let Err(err) = client.request(call, RequestOptions::default()).await {
        log::debug!("[session] server logout failed, clearing locally: {err}");
    }
    client.credentials().clear();
    Session::anonymous()
}

fn rejected_as_auth(err: ApiError) -> ApiError {
    match err {
        ApiError::Validation { status, message } => ApiError::Auth { status, message },
        other => other,
    }
}
