//! Credential storage seam.
//!
//! The backend may hand out an access token two ways: as a script-readable
//! cookie, or in a login/refresh response body (kept in `localStorage`).
//! Readers go through this trait on every request rather than caching a copy,
//! since logout and refresh replace the token between requests.

pub trait CredentialStore {
    /// Access token from the script-readable cookie, if set.
    fn cookie_token(&self) -> Option<String>;

    /// Access token persisted from a response body, if set.
    fn stored_token(&self) -> Option<String>;

    /// Persist a bearer token returned by the backend. The new token supersedes
    /// any readable cookie token, so implementations expire that cookie;
    /// otherwise `current_token` would keep preferring the stale value.
    fn store_token(&self, token: &str);

    /// Remove every locally held credential.
    fn clear(&self);

    /// Token to attach as `Authorization`, cookie first.
    fn current_token(&self) -> Option<String> {
        self.cookie_token()
            .filter(|t| !t.is_empty())
            .or_else(|| self.stored_token().filter(|t| !t.is_empty()))
    }
}
