//! Access token types for the OAuth client credentials flow.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Leeway subtracted from the token lifetime so a token is refreshed
/// before the platform actually rejects it.
const EXPIRY_LEEWAY_SECONDS: i64 = 60;

/// Raw token response from the platform's `/oauth/token` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    /// The bearer token value.
    pub access_token: String,
    /// Token type, always `Bearer`.
    pub token_type: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
    /// The scopes granted to the token.
    pub scope: String,
}

/// An OAuth access token with its expiry tracked locally.
///
/// # Example
///
/// ```rust
/// use commercetools_api::auth::{AccessToken, AccessTokenResponse};
///
/// let response = AccessTokenResponse {
///     access_token: "token-value".to_string(),
///     token_type: "Bearer".to_string(),
///     expires_in: 172_800,
///     scope: "manage_project:my-shop".to_string(),
/// };
///
/// let token = AccessToken::from_response(&response);
/// assert_eq!(token.value(), "token-value");
/// assert!(!token.is_expired());
/// ```
#[derive(Debug, Clone)]
pub struct AccessToken {
    value: String,
    scope: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates an access token from a token endpoint response.
    #[must_use]
    pub fn from_response(response: &AccessTokenResponse) -> Self {
        let lifetime = Duration::seconds(response.expires_in - EXPIRY_LEEWAY_SECONDS);
        Self {
            value: response.access_token.clone(),
            scope: response.scope.clone(),
            expires_at: Utc::now() + lifetime,
        }
    }

    /// Returns the raw bearer token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the scopes granted to this token.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the instant after which this token should not be used.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` if the token has passed its (leeway-adjusted) expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

// Verify token types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
    assert_send_sync::<AccessTokenResponse>();
};
