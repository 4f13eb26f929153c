use super::*;

#[test]
fn missing_base_falls_back_to_proxy_path() {
    assert_eq!(normalize_base_url(None), "/api");
    assert_eq!(normalize_base_url(Some("")), "/api");
    assert_eq!(normalize_base_url(Some("  / ")), "/api");
}

#[test]
fn trailing_slashes_are_trimmed() {
    assert_eq!(
        normalize_base_url(Some("https://food.example.com///")),
        "https://food.example.com"
    );
}

#[test]
fn url_joins_with_and_without_leading_slash() {
    let config = ApiConfig::with_base(Some("https://food.example.com/"));
    assert_eq!(config.url("/users/me"), "https://food.example.com/users/me");
    assert_eq!(config.url("board/list"), "https://food.example.com/board/list");
}

#[test]
fn defaults_match_backend_conventions() {
    let config = ApiConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(15));
    assert_eq!(config.cookie_name, "access_token");
    assert_eq!(config.storage_key, "access_token");
}
