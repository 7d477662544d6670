//! HTTP client for commercetools platform communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the platform API with automatic retry handling.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::Config;

/// Fixed retry wait time in seconds when no `Retry-After` header is present.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generates a correlation ID for outgoing requests.
///
/// The platform echoes the `X-Correlation-ID` header back in responses and
/// logs it on their side, which makes failed requests traceable in support
/// tickets.
#[must_use]
pub fn generate_correlation_id() -> String {
    format!("rust-sdk/{:032x}", rand::random::<u128>())
}

/// HTTP client for making requests to the commercetools platform.
///
/// The client handles:
/// - URL construction from the configured API host
/// - Default headers including User-Agent and the bearer access token
/// - `X-Correlation-ID` generation for request tracing
/// - Automatic retry logic for 429 and 5xx responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_api::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config, "access-token");
///
/// let request = HttpRequest::builder(HttpMethod::Get, "my-project/products")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.europe-west1.gcp.commercetools.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration and access token.
    ///
    /// # Arguments
    ///
    /// * `config` - The SDK configuration providing the API host and user agent prefix
    /// * `access_token` - The OAuth access token for bearer authorization
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &Config, access_token: impl Into<String>) -> Self {
        let base_uri = config.api_url().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}commercetools SDK v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let access_token = access_token.into();
        if !access_token.is_empty() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {access_token}"),
            );
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the platform.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging and correlation ID generation
    /// - Response parsing
    /// - Retry logic for 429 and 5xx responses, honoring `Retry-After`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "my-project/products")
    ///     .tries(3) // Enable retries
    ///     .build()
    ///     .unwrap();
    ///
    /// let response = client.request(request).await?;
    /// if response.is_ok() {
    ///     println!("Products: {}", response.body);
    /// }
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}/{}", self.base_uri, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        headers
            .entry("X-Correlation-ID".to_string())
            .or_insert_with(generate_correlation_id);

        // Retry loop
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            // Build the reqwest request
            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            // Add headers
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            // Add query params (repeated keys are preserved)
            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            // Add body
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            // Send request
            let res = req_builder.send().await?;

            // Parse response
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            // Parse body as JSON
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // For 5xx errors, the body may be a plain-text gateway page
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            // Check if response is OK
            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);

            // Check if we should retry
            let should_retry = code == 429 || code >= 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    correlation_id: response.correlation_id().map(String::from),
                }));
            }

            // Check if we've exhausted retries
            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        correlation_id: response.correlation_id().map(String::from),
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    correlation_id: response.correlation_id().map(String::from),
                }));
            }

            tracing::warn!(
                code,
                tries,
                path = %request.path,
                "retrying request after non-success response"
            );

            // Calculate retry delay
            let delay = Self::calculate_retry_delay(&response, code);
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // 429 and 503 carry a Retry-After hint; other 5xx use the fixed delay
        if status == 429 || status == 503 {
            if let Some(retry_after) = response.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes an error response body to a compact string.
    fn serialize_error(response: &HttpResponse) -> String {
        match response.body.as_object() {
            Some(map) if !map.is_empty() => {
                serde_json::to_string(&response.body).unwrap_or_else(|_| "{}".to_string())
            }
            _ => "{}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiUrl, ClientId, ClientSecret, ProjectKey};

    fn create_test_config() -> Config {
        Config::builder()
            .project_key(ProjectKey::new("test-project").unwrap())
            .client_id(ClientId::new("test-id").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .api_url(ApiUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let config = create_test_config();
        let client = HttpClient::new(&config, "test-access-token");

        assert_eq!(client.base_uri(), "https://api.example.com");
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = create_test_config();
        let client = HttpClient::new(&config, "test-access-token");

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("commercetools SDK v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_bearer_authorization_header() {
        let config = create_test_config();
        let client = HttpClient::new(&config, "test-access-token");

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_when_token_empty() {
        let config = create_test_config();
        let client = HttpClient::new(&config, "");

        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_accept_header_is_json() {
        let config = create_test_config();
        let client = HttpClient::new(&config, "token");

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_generated_correlation_ids_are_unique() {
        let first = generate_correlation_id();
        let second = generate_correlation_id();

        assert!(first.starts_with("rust-sdk/"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = Config::builder()
            .project_key(ProjectKey::new("test-project").unwrap())
            .client_id(ClientId::new("test-id").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .user_agent_prefix("MyShop/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config, "token");

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/1.0 | "));
        assert!(user_agent.contains("commercetools SDK"));
    }
}
