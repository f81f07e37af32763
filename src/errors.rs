//! Error types for the payrail library.
//!
//! This module defines all error types that can occur while building and
//! sending PayRail API requests.

use serde_json::Value;
use thiserror::Error;

/// Main error type for PayRail operations.
#[derive(Error, Debug)]
pub enum PayrailError {
    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing URL
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Required identifier or field absent; raised before any network call
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Unparsable date input to a list filter (`from`/`to`)
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Non-success response from the gateway; the error body is preserved verbatim
    #[error("API error (status {status})")]
    ApiError {
        /// HTTP status code returned by the gateway
        status: u16,
        /// Response body as returned by the gateway
        body: Value,
    },
}

/// Result type alias for PayRail operations.
pub type Result<T> = std::result::Result<T, PayrailError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = PayrailError::MissingField("order_id".to_string());
        assert_eq!(err.to_string(), "Missing required field: order_id");

        let err = PayrailError::InvalidDate("not a date".to_string());
        assert_eq!(err.to_string(), "Invalid date: not a date");

        let err = PayrailError::ApiError {
            status: 400,
            body: json!({"error": {"code": "BAD_REQUEST_ERROR"}}),
        };
        assert_eq!(err.to_string(), "API error (status 400)");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: PayrailError = json_err.into();
        assert!(matches!(err, PayrailError::JsonError(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
