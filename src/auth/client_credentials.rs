//! OAuth 2.0 Client Credentials Grant against the commercetools auth service.
//!
//! The platform authenticates API clients with the client credentials flow:
//! a POST to `{auth_host}/oauth/token` carrying the client ID and secret as
//! HTTP basic auth and the grant type plus scopes as a form body. The
//! response is a bearer token valid for roughly two days.
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_api::auth::obtain_access_token;
//!
//! let token = obtain_access_token(&config).await?;
//! println!("token: {}", token.value());
//! ```

use crate::auth::token::{AccessToken, AccessTokenResponse};
use crate::auth::AuthError;
use crate::config::Config;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Obtains an access token from the auth service using client credentials.
///
/// The requested scopes come from [`Config::scopes`], which defaults to
/// `manage_project:{project_key}`.
///
/// # Errors
///
/// - [`AuthError::Network`] if the request cannot be sent
/// - [`AuthError::TokenRequestFailed`] if the auth service rejects the
///   credentials (401 with `invalid_client`) or the requested scopes
///   (400 with `invalid_scope`)
/// - [`AuthError::InvalidTokenResponse`] if the response body cannot be parsed
pub async fn obtain_access_token(config: &Config) -> Result<AccessToken, AuthError> {
    let token_url = format!("{}/oauth/token", config.auth_url());

    let form = [
        ("grant_type", CLIENT_CREDENTIALS_GRANT_TYPE.to_string()),
        ("scope", config.scopes().join(" ")),
    ];

    let client = reqwest::Client::builder()
        .use_rustls_tls()
        .build()
        .map_err(AuthError::Network)?;

    let response = client
        .post(&token_url)
        .basic_auth(
            config.client_id().as_ref(),
            Some(config.client_secret().as_ref()),
        )
        .form(&form)
        .send()
        .await
        .map_err(AuthError::Network)?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::warn!(status, "token request rejected by auth service");
        return Err(AuthError::TokenRequestFailed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse = response
        .json()
        .await
        .map_err(|e| AuthError::InvalidTokenResponse {
            message: e.to_string(),
        })?;

    Ok(AccessToken::from_response(&token_response))
}
