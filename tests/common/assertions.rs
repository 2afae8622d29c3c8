//! Assertion helpers for API responses

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a strict-policy error: status code plus `{error, status}` body
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], message, "unexpected error body: {}", body);
    assert_eq!(body["status"], status.as_u16());
}

/// Assert only the status and that the body has the error shape
pub fn assert_error_status(response: &TestResponse, status: StatusCode) {
    response.assert_status(status);
    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string(), "missing error field: {}", body);
    assert_eq!(body["status"], status.as_u16());
}
