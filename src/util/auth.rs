//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical unauthenticated redirect behavior, and any
//! page whose call comes back `Auth` hands the error here so the whole app
//! sees the session end.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";

/// Whether a guard should send the user to the login screen.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.session.authenticated
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// End the session in `auth` if `err` says the user is no longer logged in.
/// The redirect effect takes it from there.
pub fn note_api_error(auth: RwSignal<AuthState>, err: &ApiError) {
    if auth.with_untracked(|state| state.session.authenticated) && err.is_auth() {
        log::debug!("[auth] session ended by {err}");
        auth.update(|state| {
            state.observe_error(err);
        });
    }
}
