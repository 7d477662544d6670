//! Error types for HTTP client operations.
//!
//! [`HttpError`] is the top-level error for everything that can go wrong
//! while executing a request: validation failures, network errors, non-2xx
//! responses, and retry exhaustion.

use thiserror::Error;

/// A request failed validation before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was provided without a content type.
    #[error("Request has a body but no body type. Set a body type when providing a body.")]
    MissingBodyType,

    /// A POST request was built without a body.
    #[error("A body is required for {method} requests.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// A non-2xx response was received from the platform.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// The serialized error body.
    pub message: String,
    /// The `X-Correlation-ID` of the failed request, for support tickets.
    pub correlation_id: Option<String>,
}

/// The retry budget for a request was exhausted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Exhausted {tries} tries, last response was HTTP {code}: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The status code of the last response.
    pub code: u16,
    /// How many attempts were made.
    pub tries: u32,
    /// The serialized error body of the last response.
    pub message: String,
    /// The `X-Correlation-ID` of the last response.
    pub correlation_id: Option<String>,
}

/// Top-level error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request failed validation before being sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A network-level error occurred (DNS, TLS, connection).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The platform responded with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retries were exhausted without a successful response.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<HttpResponseError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_message_contains_code() {
        let error = HttpResponseError {
            code: 502,
            message: "Bad Gateway".to_string(),
            correlation_id: None,
        };
        let message = error.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("Bad Gateway"));
    }

    #[test]
    fn test_max_retries_error_message_contains_tries() {
        let error = MaxHttpRetriesExceededError {
            code: 503,
            tries: 3,
            message: "unavailable".to_string(),
            correlation_id: Some("corr-1".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("503"));
    }

    #[test]
    fn test_invalid_request_wraps_into_http_error() {
        let error: HttpError = InvalidHttpRequestError::MissingBodyType.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }
}
