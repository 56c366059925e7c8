use std::sync::Arc;

use super::*;

struct FixedCookies(Option<&'static str>);

impl CookieSource for FixedCookies {
    fn cookies(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

// =============================================================
// CSRF extraction
// =============================================================

#[test]
fn csrf_token_extracted_between_marker_and_semicolon() {
    assert_eq!(
        csrf_token_from("foo=1; csrftoken=abc123; bar=2"),
        Some("abc123".to_owned())
    );
}

#[test]
fn csrf_token_extracted_at_end_of_string() {
    assert_eq!(csrf_token_from("foo=1; csrftoken=abc123"), Some("abc123".to_owned()));
}

#[test]
fn csrf_token_extracted_when_only_cookie() {
    assert_eq!(csrf_token_from("csrftoken=tok"), Some("tok".to_owned()));
}

#[test]
fn csrf_token_absent_yields_none() {
    assert_eq!(csrf_token_from("foo=1; bar=2"), None);
    assert_eq!(csrf_token_from(""), None);
}

#[test]
fn csrf_token_does_not_match_inside_other_cookie_names() {
    assert_eq!(csrf_token_from("xcsrftoken=evil; other=1"), None);
    assert_eq!(csrf_token_from("csrftokenx=evil"), None);
}

#[test]
fn client_csrf_token_reads_injected_source() {
    let client = HttpClient::with_cookie_source(
        DEFAULT_BASE_URL,
        Arc::new(FixedCookies(Some("sessionid=s1; csrftoken=abc123"))),
    );
    assert_eq!(client.csrf_token(), Some("abc123".to_owned()));
}

#[test]
fn client_csrf_token_none_without_cookie_store() {
    let client = HttpClient::with_cookie_source(DEFAULT_BASE_URL, Arc::new(FixedCookies(None)));
    assert_eq!(client.csrf_token(), None);
}

// =============================================================
// Error classification
// =============================================================

#[test]
fn status_401_and_403_classify_as_auth_required() {
    for status in [401u16, 403] {
        let err = classify_failure(status, serde_json::Value::Null);
        assert!(err.is_auth());
        assert_eq!(err.status(), Some(status));
    }
}

#[test]
fn other_failure_statuses_classify_as_http() {
    let body = serde_json::json!({ "error": "Invalid JSON format" });
    let err = classify_failure(400, body.clone());
    assert_eq!(err, ApiError::Http { status: 400, body });
    assert!(!err.is_auth());
}

#[test]
fn network_and_decode_errors_carry_no_status() {
    assert_eq!(ApiError::Network("boom".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("bad shape".to_owned()).status(), None);
}

// =============================================================
// Body parsing and URL building
// =============================================================

#[test]
fn success_range_is_200_to_299() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(is_success(299));
    assert!(!is_success(199));
    assert!(!is_success(300));
    assert!(!is_success(404));
}

#[test]
fn empty_body_parses_to_null() {
    assert_eq!(parse_body(""), serde_json::Value::Null);
}

#[test]
fn json_body_parses_to_value() {
    assert_eq!(parse_body(r#"{"tips":[]}"#), serde_json::json!({ "tips": [] }));
}

#[test]
fn non_json_body_kept_as_raw_string() {
    assert_eq!(
        parse_body("<html>gateway timeout</html>"),
        serde_json::Value::String("<html>gateway timeout</html>".to_owned())
    );
}

#[test]
fn url_for_joins_base_and_path() {
    let client = HttpClient::new("http://127.0.0.1:8000");
    assert_eq!(client.url_for("/api/tips"), "http://127.0.0.1:8000/api/tips");
}
