use axum::http::{HeaderValue, header};

use super::*;

#[test]
fn upstream_url_keeps_path_and_query() {
    let url = upstream_url("http://127.0.0.1:8000", "/api/analytics/d-1/stats?from=2026-01-01").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/analytics/d-1/stats?from=2026-01-01");
}

#[test]
fn upstream_url_rejects_garbage_base() {
    let err = upstream_url("not a url", "/api/auth/me").unwrap_err();
    assert!(matches!(err, ProxyError::InvalidUrl(_)));
}

#[test]
fn forwardable_headers_drop_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let kept = forwardable_headers(&headers);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept.get(header::COOKIE).unwrap(), "session=abc");
    assert!(kept.get(header::HOST).is_none());
}

#[test]
fn forwardable_headers_keep_repeated_set_cookie() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    assert_eq!(forwardable_headers(&headers).get_all(header::SET_COOKIE).iter().count(), 2);
}
