use super::*;

// =============================================================
// construction
// =============================================================

#[test]
fn new_rejects_non_http_base() {
    let err = ApiClient::new("ftp://host", "/api").unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUrl(url) if url == "ftp://host"));
}

#[test]
fn endpoint_joins_base_prefix_and_path() {
    let client = ApiClient::new("http://127.0.0.1:8188/", "api/").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:8188");
    assert_eq!(client.endpoint(endpoints::STATE), "http://127.0.0.1:8188/api/downloader/state");
}

#[test]
fn endpoint_without_prefix() {
    let client = ApiClient::new("https://host", "").unwrap();
    assert_eq!(client.endpoint(endpoints::ADD), "https://host/downloader/add");
}

#[test]
fn normalize_prefix_variants() {
    assert_eq!(normalize_prefix("/api"), "/api");
    assert_eq!(normalize_prefix("api"), "/api");
    assert_eq!(normalize_prefix("/"), "");
    assert_eq!(normalize_prefix("/a/b/"), "/a/b");
}

// =============================================================
// interpret
// =============================================================

#[test]
fn empty_success_body_is_ack() {
    assert_eq!(interpret(200, true, "").unwrap(), Value::Null);
}

#[test]
fn error_body_is_rejection_even_on_200() {
    let err = interpret(200, true, r#"{"error":"Path not found"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Rejected(message) if message == "Path not found"));
}

#[test]
fn error_body_on_failure_status_is_rejection() {
    let err = interpret(400, false, r#"{"error":"bad"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Rejected(message) if message == "bad"));
}

#[test]
fn non_json_failure_keeps_status_and_body() {
    let err = interpret(502, false, "Bad Gateway").unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 502, ref body } if body == "Bad Gateway"));
}

#[test]
fn json_failure_without_error_field_is_status() {
    let err = interpret(500, false, r#"{"detail":"x"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[test]
fn non_json_success_is_decode_error() {
    assert!(matches!(interpret(200, true, "<html>").unwrap_err(), ApiError::Decode(_)));
}

#[test]
fn success_body_is_returned() {
    let value = interpret(200, true, r#"{"success":true}"#).unwrap();
    assert_eq!(value["success"], Value::Bool(true));
}
