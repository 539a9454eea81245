//! Assertions on `{ data, error }` response envelopes.
//!
//! Works on raw response parts so it does not depend on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde_json::Value;

fn parse(body: &[u8]) -> Value {
    let value: Value =
        serde_json::from_slice(body).expect("response body should be a JSON envelope");
    let object = value.as_object().expect("envelope should be a JSON object");
    assert!(object.contains_key("data"), "envelope is missing `data`: {value}");
    assert!(object.contains_key("error"), "envelope is missing `error`: {value}");
    value
}

/// Asserts a success envelope and returns its `data`.
pub fn assert_envelope_ok(status: StatusCode, body: &[u8]) -> Value {
    let value = parse(body);
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {value}");
    assert!(value["error"].is_null(), "error should be null: {value}");
    assert!(!value["data"].is_null(), "data should be populated: {value}");
    value["data"].clone()
}

/// Asserts an error envelope with the given status, code and message.
///
/// When the response carries `x-trace-id`, the body's `trace_id` must match it.
pub fn assert_envelope_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: Option<&str>,
) -> Value {
    let value = parse(body);
    assert_eq!(status, expected_status, "unexpected status, body: {value}");
    assert!(value["data"].is_null(), "data should be null: {value}");

    let error = &value["error"];
    assert_eq!(error["code"], expected_code, "unexpected code: {value}");
    if let Some(message) = expected_message {
        assert_eq!(error["message"], message, "unexpected message: {value}");
    }

    if let Some(header) = headers.get("x-trace-id") {
        let header = header.to_str().expect("x-trace-id should be valid UTF-8");
        assert_eq!(error["trace_id"], header, "trace id mismatch: {value}");
    }

    error.clone()
}
