use super::*;
use crate::net::session::Session;

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState { session: Session::anonymous(), loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { session: Session::anonymous(), loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = AuthState {
        session: Session { authenticated: true, user_id: Some("u1".to_owned()), ..Session::anonymous() },
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
