use super::*;

#[test]
fn unauthorized_and_forbidden_classify_as_auth() {
    assert!(ApiError::from_status(401, "").is_auth());
    assert!(ApiError::from_status(403, "").is_auth());
}

#[test]
fn client_errors_classify_as_validation_with_backend_detail() {
    let err = ApiError::from_status(409, r#"{"detail":"email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Validation { status: 409, message: "email already registered".to_owned() }
    );
}

#[test]
fn server_errors_classify_as_server() {
    let err = ApiError::from_status(503, "upstream down");
    assert!(matches!(err, ApiError::Server { status: 503, .. }));
}

#[test]
fn backend_message_prefers_detail_then_message_then_error() {
    assert_eq!(
        backend_message(r#"{"message":"m","error":"e","detail":"d"}"#),
        Some("d".to_owned())
    );
    assert_eq!(backend_message(r#"{"message":"m","error":"e"}"#), Some("m".to_owned()));
    assert_eq!(backend_message(r#"{"error":"e"}"#), Some("e".to_owned()));
    assert_eq!(backend_message("not json"), None);
}

#[test]
fn backend_message_joins_validation_detail_lists() {
    let body = r#"{"detail":[{"msg":"field required"},{"msg":"too short"}]}"#;
    assert_eq!(backend_message(body), Some("field required, too short".to_owned()));
}

#[test]
fn method_not_allowed_hints_at_base_url() {
    let err = ApiError::from_status(405, "");
    assert!(err.user_message().contains("FOODTHING_API_BASE"));
}

#[test]
fn transport_errors_become_network_errors() {
    let err: ApiError = TransportError::Timeout(15_000).into();
    assert_eq!(err, ApiError::Network("request timed out after 15000 ms".to_owned()));
    assert_eq!(err.status(), None);
}

#[test]
fn canceled_has_no_user_message() {
    assert!(ApiError::Canceled.is_canceled());
    assert!(ApiError::Canceled.user_message().is_empty());
}
