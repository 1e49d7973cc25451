//! Response assertions for router tests

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert HTTP response is successful
pub fn assert_success(response: &TestResponse) {
    assert!(
        response.status_code().is_success(),
        "Expected success, got: {} ({})",
        response.status_code(),
        response.text()
    );
}

/// Assert HTTP response has specific status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status_code(),
        expected,
        "Expected status {}, got {}",
        expected,
        response.status_code()
    );
}

/// Assert an error body carries `message` in its `error` field
pub fn assert_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let body: Value = response.json();
    assert_eq!(body["error"], message, "unexpected error body: {}", body);
}
