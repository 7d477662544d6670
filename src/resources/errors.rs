//! Error mapping for resource operations.
//!
//! The platform reports failures as JSON error responses with a
//! `statusCode`, a `message` and a list of machine-readable `errors`.
//! [`ResourceError::from_http_error`] turns the transport-level
//! [`HttpError`] into the domain errors callers match on: 404 becomes
//! [`ResourceError::NotFound`], 409 becomes
//! [`ResourceError::ConcurrentModification`] carrying the server's current
//! version, and so on.

use serde::Deserialize;
use thiserror::Error;

use crate::clients::errors::HttpError;

/// One entry of an error response's `errors` array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Machine-readable error code, e.g. `ConcurrentModification`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// The server's current resource version, on concurrent modification.
    #[serde(default)]
    pub current_version: Option<u64>,
}

/// The body of a platform error response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseBody {
    /// The HTTP status code, repeated in the body.
    pub status_code: u16,
    /// Human-readable summary.
    pub message: String,
    /// Individual errors.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// Errors arising from resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("Resource not found: {message}")]
    NotFound {
        /// The platform's error message.
        message: String,
    },

    /// The command's version did not match the server's (HTTP 409).
    ///
    /// Re-fetch the resource and retry the command with `current_version`.
    #[error("Concurrent modification, current version is {current_version:?}: {message}")]
    ConcurrentModification {
        /// The version the server holds now, if reported.
        current_version: Option<u64>,
        /// The platform's error message.
        message: String,
    },

    /// The request was malformed or violated a constraint (HTTP 400).
    #[error("Bad request ({}): {}", body.status_code, body.message)]
    BadRequest {
        /// The parsed error response.
        body: ErrorResponseBody,
    },

    /// The access token is missing, expired or invalid (HTTP 401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// The platform's error message.
        message: String,
    },

    /// The token lacks the scopes for this operation (HTTP 403).
    #[error("Forbidden: {message}")]
    Forbidden {
        /// The platform's error message.
        message: String,
    },

    /// Any other non-2xx response.
    #[error("Unexpected response with HTTP {code}: {message}")]
    UnexpectedResponse {
        /// The HTTP status code.
        code: u16,
        /// The raw error body.
        message: String,
    },

    /// A transport-level failure.
    #[error(transparent)]
    Http(HttpError),

    /// A response body did not match the expected shape.
    #[error("Failed to deserialize response: {message}")]
    Deserialization {
        /// What went wrong while parsing.
        message: String,
    },
}

impl ResourceError {
    /// Maps a transport error to a domain error.
    ///
    /// Response errors are classified by status code; everything else
    /// (validation, network, retry exhaustion) passes through as
    /// [`ResourceError::Http`].
    #[must_use]
    pub fn from_http_error(error: HttpError) -> Self {
        match error {
            HttpError::Response(response) => {
                Self::from_status(response.code, &response.message)
            }
            other => Self::Http(other),
        }
    }

    fn from_status(code: u16, raw_body: &str) -> Self {
        let body: Option<ErrorResponseBody> = serde_json::from_str(raw_body).ok();
        let message = body
            .as_ref()
            .map_or_else(|| raw_body.to_string(), |b| b.message.clone());

        match code {
            404 => Self::NotFound { message },
            409 => {
                let current_version = body.as_ref().and_then(|b| {
                    b.errors
                        .iter()
                        .find(|e| e.code == "ConcurrentModification")
                        .and_then(|e| e.current_version)
                });
                Self::ConcurrentModification {
                    current_version,
                    message,
                }
            }
            400 => body.map_or(
                Self::UnexpectedResponse {
                    code,
                    message: raw_body.to_string(),
                },
                |body| Self::BadRequest { body },
            ),
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { message },
            _ => Self::UnexpectedResponse {
                code,
                message: raw_body.to_string(),
            },
        }
    }

    /// Wraps a serde error from response parsing.
    #[must_use]
    pub fn deserialization(error: &serde_json::Error) -> Self {
        Self::Deserialization {
            message: error.to_string(),
        }
    }
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        Self::from_http_error(error)
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::HttpResponseError;

    fn response_error(code: u16, body: &str) -> HttpError {
        HttpError::Response(HttpResponseError {
            code,
            message: body.to_string(),
            correlation_id: None,
        })
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let body = r#"{"statusCode": 404, "message": "The Resource with ID 'x' was not found."}"#;
        let error = ResourceError::from_http_error(response_error(404, body));

        assert!(matches!(
            error,
            ResourceError::NotFound { message } if message.contains("was not found")
        ));
    }

    #[test]
    fn test_409_extracts_current_version() {
        let body = r#"{
            "statusCode": 409,
            "message": "Object has a different version than expected.",
            "errors": [{
                "code": "ConcurrentModification",
                "message": "Object has a different version than expected.",
                "currentVersion": 12
            }]
        }"#;
        let error = ResourceError::from_http_error(response_error(409, body));

        match error {
            ResourceError::ConcurrentModification {
                current_version, ..
            } => assert_eq!(current_version, Some(12)),
            other => panic!("Expected ConcurrentModification, got {other:?}"),
        }
    }

    #[test]
    fn test_400_carries_parsed_error_body() {
        let body = r#"{
            "statusCode": 400,
            "message": "Request body does not contain valid JSON.",
            "errors": [{"code": "InvalidJsonInput", "message": "Request body does not contain valid JSON."}]
        }"#;
        let error = ResourceError::from_http_error(response_error(400, body));

        match error {
            ResourceError::BadRequest { body } => {
                assert_eq!(body.status_code, 400);
                assert_eq!(body.errors[0].code, "InvalidJsonInput");
            }
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_401_and_403_map_to_auth_errors() {
        let unauthorized = ResourceError::from_http_error(response_error(
            401,
            r#"{"statusCode": 401, "message": "invalid_token"}"#,
        ));
        assert!(matches!(unauthorized, ResourceError::Unauthorized { .. }));

        let forbidden = ResourceError::from_http_error(response_error(
            403,
            r#"{"statusCode": 403, "message": "insufficient_scope"}"#,
        ));
        assert!(matches!(forbidden, ResourceError::Forbidden { .. }));
    }

    #[test]
    fn test_unparseable_body_falls_back_to_raw_message() {
        let error = ResourceError::from_http_error(response_error(404, "plain text"));
        assert!(matches!(
            error,
            ResourceError::NotFound { message } if message == "plain text"
        ));
    }

    #[test]
    fn test_other_codes_map_to_unexpected_response() {
        let error = ResourceError::from_http_error(response_error(502, "{}"));
        assert!(matches!(
            error,
            ResourceError::UnexpectedResponse { code: 502, .. }
        ));
    }
}
