use super::*;

fn signed_in() -> AuthState {
    AuthState {
        session: Session {
            authenticated: true,
            display_name: Some("Ann".into()),
            ..Session::anonymous()
        },
        loading: false,
    }
}

#[test]
fn bootstrap_outcome_sets_loading_only_when_anonymous() {
    assert!(AuthState::from_bootstrap(Session::anonymous()).loading);
    assert!(!AuthState::from_bootstrap(signed_in().session).loading);
}

#[test]
fn auth_errors_end_the_session() {
    let mut state = signed_in();
    assert!(!state.observe_error(&ApiError::Network("offline".into())));
    assert!(state.is_authenticated());

    assert!(state.observe_error(&ApiError::Auth { status: 401, message: "expired".into() }));
    assert!(!state.is_authenticated());
    assert!(!state.observe_error(&ApiError::Auth { status: 401, message: "again".into() }));
}

#[test]
fn display_name_falls_back_to_guest() {
    assert_eq!(signed_in().display_name(), "Ann");
    assert_eq!(AuthState::default().display_name(), "Guest");
}

#[test]
fn login_attempt_tracks_loading() {
    let mut state = AuthState::default();
    state.begin_login();
    assert!(state.loading);
    assert!(!state.is_authenticated());

    state.login_failed();
    assert_eq!(state, AuthState::default());

    state.begin_login();
    state.signed_in(signed_in().session);
    assert!(!state.loading);
    assert_eq!(state.display_name(), "Ann");
}
