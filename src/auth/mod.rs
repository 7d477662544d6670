//! Authentication against the commercetools auth service.
//!
//! The platform uses OAuth 2.0 with the client credentials grant for
//! server-to-server API clients. See [`obtain_access_token`] for the flow
//! and [`AccessToken`] for expiry tracking.

mod client_credentials;
mod token;

pub use client_credentials::obtain_access_token;
pub use token::{AccessToken, AccessTokenResponse};

use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token request could not be sent.
    #[error("Network error during token request: {0}")]
    Network(#[from] reqwest::Error),

    /// The auth service rejected the request.
    #[error("Token request failed with HTTP {status}: {message}")]
    TokenRequestFailed {
        /// The HTTP status code of the rejection.
        status: u16,
        /// The error body returned by the auth service.
        message: String,
    },

    /// The token response could not be parsed.
    #[error("Invalid token response: {message}")]
    InvalidTokenResponse {
        /// What went wrong while parsing.
        message: String,
    },
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
