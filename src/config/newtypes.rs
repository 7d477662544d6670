//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated commercetools project key.
///
/// Project keys identify the project every request is scoped to. They appear
/// in URL paths and OAuth scopes, so they are validated up front: lowercase
/// letters, digits, `-` and `_`, between 2 and 36 characters.
///
/// # Example
///
/// ```rust
/// use commercetools_api::ProjectKey;
///
/// let key = ProjectKey::new("my-shop-dev").unwrap();
/// assert_eq!(key.as_ref(), "my-shop-dev");
///
/// assert!(ProjectKey::new("Has Spaces").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Creates a new validated project key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProjectKey`] if the key does not match
    /// the allowed format.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let valid_chars = key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if key.len() < 2 || key.len() > 36 || !valid_chars {
            return Err(ConfigError::InvalidProjectKey { key });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API client ID.
///
/// This newtype ensures the client ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API client secret.
///
/// This newtype ensures the secret is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use commercetools_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated absolute URL for the API or auth host.
///
/// Accepts `https://` URLs (plain `http://` is allowed to support test
/// servers). A trailing slash is stripped so URLs concatenate cleanly
/// with request paths.
///
/// # Example
///
/// ```rust
/// use commercetools_api::ApiUrl;
///
/// let url = ApiUrl::new("https://api.europe-west1.gcp.commercetools.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.europe-west1.gcp.commercetools.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(url.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidUrl { url }),
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Verify newtypes are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProjectKey>();
    assert_send_sync::<ClientId>();
    assert_send_sync::<ClientSecret>();
    assert_send_sync::<ApiUrl>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_key_accepts_valid_keys() {
        assert!(ProjectKey::new("my-project").is_ok());
        assert!(ProjectKey::new("shop_42").is_ok());
        assert!(ProjectKey::new("ab").is_ok());
    }

    #[test]
    fn test_project_key_rejects_invalid_keys() {
        assert!(ProjectKey::new("").is_err());
        assert!(ProjectKey::new("a").is_err());
        assert!(ProjectKey::new("Has Upper").is_err());
        assert!(ProjectKey::new("sp ace").is_err());
        assert!(ProjectKey::new("a".repeat(37)).is_err());
    }

    #[test]
    fn test_client_id_rejects_empty() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_debug_is_masked() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug = format!("{secret:?}");
        assert_eq!(debug, "ClientSecret(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let url = ApiUrl::new("https://api.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_api_url_accepts_http_for_test_servers() {
        let url = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_api_url_rejects_missing_scheme() {
        assert!(ApiUrl::new("api.example.com").is_err());
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("").is_err());
    }
}
