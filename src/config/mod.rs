//! Configuration types for the commercetools SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with a commercetools project.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Config`]: The main configuration struct holding all SDK settings
//! - [`ConfigBuilder`]: A builder for constructing [`Config`] instances
//! - [`ProjectKey`]: A validated project key newtype
//! - [`ClientId`]: A validated API client ID newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//! - [`ApiUrl`]: A validated absolute URL for the API and auth hosts
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::{Config, ProjectKey, ClientId, ClientSecret};
//!
//! let config = Config::builder()
//!     .project_key(ProjectKey::new("my-project").unwrap())
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, ClientId, ClientSecret, ProjectKey};

use crate::error::ConfigError;

/// Default API host (Europe/GCP region).
pub const DEFAULT_API_URL: &str = "https://api.europe-west1.gcp.commercetools.com";

/// Default auth host (Europe/GCP region).
pub const DEFAULT_AUTH_URL: &str = "https://auth.europe-west1.gcp.commercetools.com";

/// Configuration for the commercetools SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the project key, API client credentials, and host settings. The API and
/// auth hosts default to the Europe/GCP region and can be overridden per
/// region or for test servers.
///
/// # Thread Safety
///
/// `Config` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use commercetools_api::{Config, ProjectKey, ClientId, ClientSecret, ApiUrl};
///
/// let config = Config::builder()
///     .project_key(ProjectKey::new("my-project").unwrap())
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .api_url(ApiUrl::new("https://api.us-central1.gcp.commercetools.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.project_key().as_ref(), "my-project");
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    project_key: ProjectKey,
    client_id: ClientId,
    client_secret: ClientSecret,
    api_url: ApiUrl,
    auth_url: ApiUrl,
    scopes: Vec<String>,
    user_agent_prefix: Option<String>,
}

impl Config {
    /// Creates a new builder for constructing a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the project key.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the API client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the API client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the API host URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the auth host URL.
    #[must_use]
    pub const fn auth_url(&self) -> &ApiUrl {
        &self.auth_url
    }

    /// Returns the OAuth scopes requested for access tokens.
    ///
    /// Defaults to `manage_project:{project_key}` when none were configured.
    #[must_use]
    pub fn scopes(&self) -> Vec<String> {
        if self.scopes.is_empty() {
            vec![format!("manage_project:{}", self.project_key)]
        } else {
            self.scopes.clone()
        }
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
};

/// Builder for constructing [`Config`] instances.
///
/// Required fields are `project_key`, `client_id` and `client_secret`.
/// All other fields have sensible defaults.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `auth_url`: [`DEFAULT_AUTH_URL`]
/// - `scopes`: `manage_project:{project_key}`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    project_key: Option<ProjectKey>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    api_url: Option<ApiUrl>,
    auth_url: Option<ApiUrl>,
    scopes: Vec<String>,
    user_agent_prefix: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project key (required).
    #[must_use]
    pub fn project_key(mut self, key: ProjectKey) -> Self {
        self.project_key = Some(key);
        self
    }

    /// Sets the API client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the API client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the API host URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the auth host URL.
    #[must_use]
    pub fn auth_url(mut self, url: ApiUrl) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Adds an OAuth scope to request for access tokens.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`Config`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `project_key`,
    /// `client_id` or `client_secret` are not set.
    pub fn build(self) -> Result<Config, ConfigError> {
        let project_key = self.project_key.ok_or(ConfigError::MissingRequiredField {
            field: "project_key",
        })?;
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self.client_secret.ok_or(ConfigError::MissingRequiredField {
            field: "client_secret",
        })?;

        let default_url = |url: &str| {
            ApiUrl::new(url).unwrap_or_else(|_| unreachable!("default URLs are valid"))
        };

        Ok(Config {
            project_key,
            client_id,
            client_secret,
            api_url: self.api_url.unwrap_or_else(|| default_url(DEFAULT_API_URL)),
            auth_url: self
                .auth_url
                .unwrap_or_else(|| default_url(DEFAULT_AUTH_URL)),
            scopes: self.scopes,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> ConfigBuilder {
        Config::builder()
            .project_key(ProjectKey::new("my-project").unwrap())
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
    }

    #[test]
    fn test_builder_requires_project_key() {
        let result = Config::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "project_key"
            })
        ));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = Config::builder()
            .project_key(ProjectKey::new("my-project").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = minimal_builder().build().unwrap();

        assert_eq!(config.api_url().as_ref(), DEFAULT_API_URL);
        assert_eq!(config.auth_url().as_ref(), DEFAULT_AUTH_URL);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_default_scope_is_manage_project() {
        let config = minimal_builder().build().unwrap();
        assert_eq!(config.scopes(), vec!["manage_project:my-project"]);
    }

    #[test]
    fn test_explicit_scopes_override_default() {
        let config = minimal_builder()
            .scope("view_products:my-project")
            .scope("manage_orders:my-project")
            .build()
            .unwrap();

        assert_eq!(
            config.scopes(),
            vec!["view_products:my-project", "manage_orders:my-project"]
        );
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_secret() {
        let config = minimal_builder().build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.project_key(), config.project_key());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("ClientSecret(*****)"));
    }
}
