//! Error types for SDK configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::{ProjectKey, ConfigError};
//!
//! let result = ProjectKey::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidProjectKey { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Project key is invalid.
    #[error("Invalid project key '{key}'. Expected lowercase letters, digits, '-' or '_' (2-36 characters).")]
    InvalidProjectKey {
        /// The invalid key that was provided.
        key: String,
    },

    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the client ID of an API client for your project.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the client secret of an API client for your project.")]
    EmptyClientSecret,

    /// An API or auth URL is invalid.
    #[error("Invalid URL '{url}'. Please provide an absolute https URL (e.g., 'https://api.europe-west1.gcp.commercetools.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
