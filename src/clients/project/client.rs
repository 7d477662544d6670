//! Project-scoped client for the commercetools platform.

use std::sync::Arc;

use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::Config;
use crate::resources::errors::ResourceError;

/// A client scoped to a single commercetools project.
///
/// Every endpoint of the platform API lives under `/{projectKey}`; this
/// client prepends the configured project key to each request path and maps
/// non-2xx responses to [`ResourceError`].
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_api::{Config, ProjectClient};
///
/// let client = ProjectClient::new(&config, access_token);
///
/// let response = client.get("products", vec![]).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug, Clone)]
pub struct ProjectClient {
    http_client: Arc<HttpClient>,
    project_key: String,
}

// Verify ProjectClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProjectClient>();
};

impl ProjectClient {
    /// Creates a new project-scoped client.
    #[must_use]
    pub fn new(config: &Config, access_token: impl Into<String>) -> Self {
        Self {
            http_client: Arc::new(HttpClient::new(config, access_token)),
            project_key: config.project_key().to_string(),
        }
    }

    /// Returns the project key this client is scoped to.
    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Builds the full request path for an endpoint path.
    fn full_path(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.project_key)
    }

    /// Sends a GET request to an endpoint of this project.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for request failures and non-2xx responses.
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.full_path(path))
            .query(query)
            .build()
            .map_err(crate::clients::errors::HttpError::from)?;
        self.execute(request).await
    }

    /// Sends a POST request with a JSON body to an endpoint of this project.
    ///
    /// The platform uses POST both for creating resources and for posting
    /// update commands.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for request failures and non-2xx responses.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.full_path(path))
            .body(body)
            .body_type(DataType::Json)
            .build()
            .map_err(crate::clients::errors::HttpError::from)?;
        self.execute(request).await
    }

    /// Sends a DELETE request to an endpoint of this project.
    ///
    /// Deletions on the platform are versioned; pass the expected resource
    /// version in `query` as `version`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for request failures and non-2xx responses.
    pub async fn delete(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, ResourceError> {
        let request = HttpRequest::builder(HttpMethod::Delete, self.full_path(path))
            .query(query)
            .build()
            .map_err(crate::clients::errors::HttpError::from)?;
        self.execute(request).await
    }

    /// Executes a pre-built request, mapping error responses.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for request failures and non-2xx responses.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ResourceError> {
        match self.http_client.request(request).await {
            Ok(response) => Ok(response),
            Err(error) => Err(ResourceError::from_http_error(error)),
        }
    }
}
