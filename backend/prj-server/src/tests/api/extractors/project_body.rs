use crate::api::extractors::project_body::has_json_content_type;

use axum::http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};

fn headers_with(content_type: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers
}

#[test]
fn test_json_content_type_detected() {
    assert!(has_json_content_type(&headers_with("application/json")));
}

#[test]
fn test_json_content_type_with_charset_detected() {
    assert!(has_json_content_type(&headers_with(
        "Application/JSON; charset=utf-8"
    )));
}

#[test]
fn test_json_suffix_content_type_detected() {
    assert!(has_json_content_type(&headers_with(
        "application/merge-patch+json"
    )));
}

#[test]
fn test_other_content_types_not_json() {
    assert!(!has_json_content_type(&headers_with("text/plain")));
    assert!(!has_json_content_type(&headers_with(
        "application/x-www-form-urlencoded"
    )));
}

#[test]
fn test_missing_content_type_not_json() {
    assert!(!has_json_content_type(&HeaderMap::new()));
}
