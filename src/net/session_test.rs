use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::client::REFRESH_PATH;
use crate::net::error::TransportError;
use crate::net::test_support::*;

const NOW: i64 = 1_700_000_000;

#[test]
fn bootstrap_without_credentials_is_anonymous() {
    let store = MemoryCredentials::default();
    assert_eq!(bootstrap(&store, NOW), Session::anonymous());
    assert_eq!(store.clear_count(), 0);
}

#[test]
fn bootstrap_reads_claims_from_a_live_token() {
    let token = make_token(&json!({ "sub": 9, "email": "a@x.com", "nickname": "Ann", "exp": NOW + 60 }));
    let store = MemoryCredentials::with_stored(&token);

    let session = bootstrap(&store, NOW);

    assert!(session.authenticated);
    assert_eq!(session.user_id.as_deref(), Some("9"));
    assert_eq!(session.email.as_deref(), Some("a@x.com"));
    assert_eq!(session.display_name.as_deref(), Some("Ann"));
    assert_eq!(session.expires_at, Some(NOW + 60));
}

#[test]
fn bootstrap_is_idempotent() {
    let token = make_token(&json!({ "sub": "u1", "exp": NOW + 1 }));
    let store = MemoryCredentials::with_cookie(&token);
    assert_eq!(bootstrap(&store, NOW), bootstrap(&store, NOW));

    let expired = MemoryCredentials::with_stored(&make_token(&json!({ "sub": "u1", "exp": NOW })));
    assert_eq!(bootstrap(&expired, NOW), bootstrap(&expired, NOW));
}

#[test]
fn expired_token_yields_anonymous_and_clears_store() {
    let store = MemoryCredentials::with_stored(&make_token(&json!({ "sub": "u1", "exp": NOW })));

    let session = bootstrap(&store, NOW);

    assert!(!session.authenticated);
    assert!(store.is_empty());
    assert_eq!(store.clear_count(), 1);
}

#[test]
fn malformed_token_degrades_silently() {
    let store = MemoryCredentials::with_stored("not-a-token");
    assert_eq!(bootstrap(&store, NOW), Session::anonymous());
    assert!(store.is_empty());
}

#[test]
fn login_then_protected_request_succeeds() {
    let token = make_token(&json!({ "sub": "7", "email": "cook@x.com", "exp": NOW * 2 }));
    let issued = token.clone();
    let transport = ScriptedTransport::new(move |req| {
        if req.url.ends_with(LOGIN_PATH) {
            return reply(200, &json!({ "access_token": issued }).to_string());
        }
        if req.bearer() == Some(issued.as_str()) {
            reply(200, "[]")
        } else {
            reply(401, "")
        }
    });
    let creds = MemoryCredentials::default();
    let client = test_client(transport.clone(), creds.clone());

    let session = block_on(login(&client, "cook@x.com", "secret123", NOW)).unwrap();
    assert!(session.authenticated);
    assert_eq!(session.user_id.as_deref(), Some("7"));
    assert_eq!(creds.stored_token(), Some(token));

    let list = block_on(client.request(ApiRequest::get("/ingredients"), RequestOptions::default())).unwrap();
    assert_eq!(list.status, 200);
    assert_eq!(transport.count(REFRESH_PATH), 0);

    let calls = transport.calls();
    assert_eq!(
        calls[0].body,
        crate::net::transport::Body::Json(json!({ "email": "cook@x.com", "password": "secret123" }))
    );
}

#[test]
fn cookie_only_login_confirms_through_profile() {
    let transport = ScriptedTransport::new(|req| {
        if req.url.ends_with(ME_PATH) {
            reply(200, r#"{"id":3,"email":"c@x.com","nickname":"Chef"}"#)
        } else {
            reply(200, "")
        }
    });
    let client = test_client(transport.clone(), MemoryCredentials::default());

    let session = block_on(login(&client, "c@x.com", "pw", NOW)).unwrap();

    assert_eq!(session.user_id.as_deref(), Some("3"));
    assert_eq!(session.display_name.as_deref(), Some("Chef"));
    assert_eq!(transport.count(ME_PATH), 1);
}

#[test]
fn expired_token_from_login_defers_to_profile() {
    let stale = make_token(&json!({ "sub": "7", "nickname": "Old", "exp": NOW - 5 }));
    let transport = ScriptedTransport::new(move |req| {
        if req.url.ends_with(LOGIN_PATH) {
            reply(200, &json!({ "token": stale }).to_string())
        } else if req.url.ends_with(ME_PATH) {
            reply(200, r#"{"id":7,"email":"cook@x.com","nickname":"Chef"}"#)
        } else {
            reply(404, "")
        }
    });
    let client = test_client(transport.clone(), MemoryCredentials::default());

    let session = block_on(login(&client, "cook@x.com", "pw", NOW)).unwrap();

    assert_eq!(session.display_name.as_deref(), Some("Chef"));
    assert_eq!(session.expires_at, None);
    assert_eq!(transport.count(ME_PATH), 1);
}

#[test]
fn token_stored_at_login_outranks_an_old_cookie() {
    let fresh = make_token(&json!({ "sub": "2", "nickname": "New", "exp": NOW + 60 }));
    let issued = fresh.clone();
    let transport = ScriptedTransport::new(move |_| reply(200, &json!({ "access_token": issued }).to_string()));
    let creds = MemoryCredentials::with_cookie(&make_token(&json!({ "sub": "1", "nickname": "Old", "exp": NOW + 60 })));
    let client = test_client(transport, creds.clone());

    let session = block_on(login(&client, "new@x.com", "pw", NOW)).unwrap();

    assert_eq!(session.display_name.as_deref(), Some("New"));
    assert_eq!(creds.current_token(), Some(fresh));
    assert_eq!(bootstrap(&creds, NOW), session);
}

#[test]
fn rejected_login_is_an_auth_error_without_refresh() {
    let transport = ScriptedTransport::new(|_| reply(400, r#"{"detail":"wrong password"}"#));
    let client = test_client(transport.clone(), MemoryCredentials::default());

    let outcome = block_on(login(&client, "a@x.com", "bad", NOW));

    assert_eq!(outcome, Err(ApiError::Auth { status: 400, message: "wrong password".to_owned() }));
    assert_eq!(transport.count(REFRESH_PATH), 0);
}

#[test]
fn logout_clears_even_when_server_is_unreachable() {
    let transport = ScriptedTransport::new(|_| reply_err(TransportError::Network("offline".into())));
    let creds = MemoryCredentials::with_stored(&make_token(&json!({ "sub": "1" })));
    let client = test_client(transport.clone(), creds.clone());

    let session = block_on(logout(&client));

    assert_eq!(session, Session::anonymous());
    assert!(creds.is_empty());
    assert_eq!(transport.count(LOGOUT_PATH), 1);
}

#[test]
fn verify_reports_missing_server_session() {
    let transport = ScriptedTransport::new(|_| reply(401, r#"{"detail":"not logged in"}"#));
    let client = test_client(transport, MemoryCredentials::default());

    let outcome = block_on(verify(&client));

    assert!(outcome.is_err_and(|e| e.is_auth()));
}

#[test]
fn anonymous_verify_never_attempts_a_refresh() {
    let transport = ScriptedTransport::new(|_| reply(401, ""));
    let client = test_client(transport.clone(), MemoryCredentials::default());

    capture_logs();

    let outcome = block_on(verify(&client));

    assert!(matches!(outcome, Err(ApiError::Auth { status: 401, .. })));
    assert_eq!(transport.count(ME_PATH), 1);
    assert_eq!(transport.count(REFRESH_PATH), 0);
    assert!(captured_logs().iter().all(|(level, _)| *level > log::Level::Warn));
}

#[test]
fn profile_without_name_falls_back_to_email() {
    let session = Session::from_profile(&json!({ "user_id": "x", "email": "e@x.com" }));
    assert_eq!(session.display_name.as_deref(), Some("e@x.com"));
    assert!(session.authenticated);
    assert!(!session.is_expired(i64::MAX));
}
