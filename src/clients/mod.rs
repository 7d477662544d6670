//! HTTP clients for the commercetools platform API.
//!
//! This module provides the low-level [`HttpClient`] with retry handling,
//! the request/response types, and the [`ProjectClient`] that scopes all
//! requests to a single project.

pub mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod project;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{generate_correlation_id, HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use project::ProjectClient;
