//! Identity provider client
//!
//! The store session is wholly owned by the hosted identity provider: this
//! application never stores credentials, hashes passwords or parses the
//! session token. It only forwards the opaque token for verification and
//! receives a store account id back.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use shared::{AppError, AppResult, ErrorCode};

/// Opaque store account identifier issued by the identity provider
pub type StoreId = String;

/// Store-session verifier
///
/// `Ok(None)` means the token is not a valid session (expired, revoked,
/// unknown). `Err` means the provider itself failed and the request should
/// surface a 500, not a 401.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn verify_session(&self, token: &str) -> AppResult<Option<StoreId>>;
}

/// HTTP client for the hosted identity provider
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct VerifySessionResponse {
    store_id: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn verify_session(&self, token: &str) -> AppResult<Option<StoreId>> {
        let url = format!("{}/api/session/verify", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                AppError::with_message(
                    ErrorCode::IdentityProviderError,
                    format!("Identity provider unreachable: {e}"),
                )
            })?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let body: VerifySessionResponse = response.json().await.map_err(|e| {
                    AppError::with_message(
                        ErrorCode::IdentityProviderError,
                        format!("Malformed identity provider response: {e}"),
                    )
                })?;
                Ok(Some(body.store_id))
            }
            // Invalid or expired token - not an error, just no session
            reqwest::StatusCode::UNAUTHORIZED
            | reqwest::StatusCode::FORBIDDEN
            | reqwest::StatusCode::NOT_FOUND => Ok(None),
            status => Err(AppError::with_message(
                ErrorCode::IdentityProviderError,
                format!("Identity provider returned {status}"),
            )),
        }
    }
}

/// Static provider for development and tests
///
/// Maps fixed tokens to store ids without any network calls.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    sessions: HashMap<String, StoreId>,
}

impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, token: impl Into<String>, store_id: impl Into<String>) -> Self {
        self.sessions.insert(token.into(), store_id.into());
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn verify_session(&self, token: &str) -> AppResult<Option<StoreId>> {
        Ok(self.sessions.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_known_token() {
        let provider = StaticIdentityProvider::new().with_session("tok", "store_1");
        let resolved = provider.verify_session("tok").await.unwrap();
        assert_eq!(resolved.as_deref(), Some("store_1"));
    }

    #[tokio::test]
    async fn test_static_provider_unknown_token() {
        let provider = StaticIdentityProvider::new().with_session("tok", "store_1");
        assert_eq!(provider.verify_session("other").await.unwrap(), None);
    }
}
