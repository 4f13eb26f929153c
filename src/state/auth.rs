//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::session::Session;

/// Current session plus whether a login or verification is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl AuthState {
    /// State right after the synchronous bootstrap. An anonymous result stays
    /// `loading` until the server has been asked about a cookie-only session.
    pub fn from_bootstrap(session: Session) -> Self {
        let loading = !session.authenticated;
        Self { session, loading }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub fn signed_in(&mut self, session: Session) {
        self.session = session;
        self.loading = false;
    }

    /// A login request is in flight.
    pub fn begin_login(&mut self) {
        self.loading = true;
    }

    /// The login request settled without a session.
    pub fn login_failed(&mut self) {
        self.session = Session::anonymous();
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.session = Session::anonymous();
        self.loading = false;
    }

    /// Drop the session when a call failed for lack of authentication.
    /// Returns whether the session ended.
    pub fn observe_error(&mut self, err: &ApiError) -> bool {
        if err.is_auth() && self.session.authenticated {
            self.signed_out();
            return true;
        }
        false
    }

    /// Name for the header and settings screen.
    pub fn display_name(&self) -> &str {
        self.session.display_name.as_deref().unwrap_or("Guest")
    }
}
