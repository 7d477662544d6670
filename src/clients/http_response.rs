//! HTTP response types for the commercetools SDK.
//!
//! This module provides the [`HttpResponse`] type for parsing and accessing
//! API response data.

use std::collections::HashMap;

/// An HTTP response from the commercetools platform.
///
/// Contains the response status code, headers, parsed JSON body, and
/// platform-specific header values like the correlation ID and retry hints.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// The `Retry-After` header, which the platform sends alongside 429 and
    /// 503 responses, is parsed into `retry_request_after`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Correlation-ID` header value, if present.
    ///
    /// The platform echoes the correlation ID of each request; include it
    /// when reporting issues to commercetools support.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.headers
            .get("x-correlation-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Served-By` header value, if present.
    #[must_use]
    pub fn served_by(&self) -> Option<&str> {
        self.headers
            .get("x-served-by")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        let response_400 = HttpResponse::new(400, HashMap::new(), json!({}));
        assert!(!response_400.is_ok());

        let response_404 = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!response_404.is_ok());

        let response_429 = HttpResponse::new(429, HashMap::new(), json!({}));
        assert!(!response_429.is_ok());

        let response_502 = HttpResponse::new(502, HashMap::new(), json!({}));
        assert!(!response_502.is_ok());
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_correlation_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-correlation-id".to_string(),
            vec!["projects-abc-123".to_string()],
        );

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.correlation_id(), Some("projects-abc-123"));
    }

    #[test]
    fn test_correlation_id_none_when_missing() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.correlation_id().is_none());
    }

    #[test]
    fn test_empty_body_returns_empty_json() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.body, json!({}));
    }
}
