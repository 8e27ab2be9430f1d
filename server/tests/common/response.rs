//! Test response wrapper with fluent assertions

use actix_web::{dev::ServiceResponse, http::StatusCode};
use coffer_server_core::{ErrorResponse, PublicErrorType};
use serde::de::DeserializeOwned;

/// Wrapper around ServiceResponse providing fluent assertions
pub struct TestResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    /// Create TestResponse from ServiceResponse
    pub(crate) async fn new(resp: ServiceResponse) -> Self {
        let status = resp.status();
        let body = actix_web::body::to_bytes(resp.into_body())
            .await
            .unwrap()
            .to_vec();
        Self { status, body }
    }

    /// Get the response status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the raw response body bytes
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as a string
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    // Status assertions

    /// Assert status equals expected, returns self for chaining
    pub fn assert_status(
        self,
        expected: StatusCode,
    ) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected}, got {}. Body: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Assert status is 200 OK
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    /// Assert status is 400 Bad Request
    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    /// Assert status is 404 Not Found
    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Assert the body is empty
    pub fn assert_empty(self) -> Self {
        assert!(
            self.body.is_empty(),
            "Expected empty body, got: {}",
            self.body_string()
        );
        self
    }

    // Body parsing

    /// Parse body as JSON, panics if parsing fails
    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to parse response body as JSON: {}. Body: {}",
                e,
                self.body_string()
            )
        })
    }

    /// Parse body as ErrorResponse
    pub fn error_response(self) -> ErrorResponse {
        self.json()
    }

    // Error assertions

    /// Assert error type matches expected
    pub fn assert_error_type(
        self,
        expected: PublicErrorType,
    ) -> Self {
        let err: ErrorResponse = serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to parse error response: {}. Body: {}",
                e,
                self.body_string()
            )
        });
        assert_eq!(
            err.error, expected,
            "Expected error type {:?}, got {:?}",
            expected, err.error
        );
        self
    }

    /// Assert response is a not found error
    pub fn assert_not_found_error(self) -> Self {
        self.assert_not_found()
            .assert_error_type(PublicErrorType::NotFound)
    }

    /// Assert response is an invalid body error
    pub fn assert_invalid_body_error(self) -> Self {
        self.assert_bad_request()
            .assert_error_type(PublicErrorType::InvalidBody)
    }

    /// Assert error description contains expected substring
    pub fn assert_error_contains(
        self,
        substring: &str,
    ) -> Self {
        let err: ErrorResponse = serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to parse error response: {}. Body: {}",
                e,
                self.body_string()
            )
        });
        let desc = err.error_description.unwrap_or_default();
        assert!(
            desc.contains(substring),
            "Expected error description to contain '{}', but got: {}",
            substring,
            desc
        );
        self
    }
}

impl std::fmt::Debug for TestResponse {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("TestResponse")
            .field("status", &self.status)
            .field("body", &self.body_string())
            .finish()
    }
}
