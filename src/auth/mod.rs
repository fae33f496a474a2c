pub mod oauth2;

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use oauth2::OAuthClient;

/// Static OAuth2 application credentials, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Tokens returned by the token endpoint.
///
/// The access token is used immediately and never persisted here; persisting
/// the refresh token is the caller's job. `expires_at` is tolerated missing
/// because no expiry-aware refresh happens within a single run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Which token flow to run, decided once at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenFlow {
    /// Refresh a previously stored token.
    Refresh(String),
    /// Exchange a one-time authorization code.
    Exchange(String),
}

impl TokenFlow {
    /// Select the flow from the configured inputs. A refresh token always
    /// wins over a code: refresh tokens are reusable, codes are single-use.
    pub fn select(refresh_token: Option<String>, code: Option<String>) -> Result<Self> {
        if let Some(token) = refresh_token {
            Ok(TokenFlow::Refresh(token))
        } else if let Some(code) = code {
            Ok(TokenFlow::Exchange(code))
        } else {
            Err(Error::Config(
                "No STRAVA_REFRESH_TOKEN or STRAVA_CODE configured".to_string(),
            ))
        }
    }
}

/// Trait for providers that can run the OAuth2 token flows
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Exchange a one-time authorization code for an initial token grant
    async fn exchange_code(&self, code: &str) -> Result<TokenGrant>;

    /// Obtain a fresh token grant from a stored refresh token
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenGrant>;
}

/// Run the selected flow against a provider. Exactly one flow is invoked
/// per call; a grant is never refreshed again within the same run.
pub async fn resolve_grant(provider: &dyn TokenProvider, flow: &TokenFlow) -> Result<TokenGrant> {
    match flow {
        TokenFlow::Refresh(token) => {
            info!("Refreshing access token");
            provider.refresh_token(token).await
        }
        TokenFlow::Exchange(code) => {
            info!("Exchanging one-time code for tokens");
            provider.exchange_code(code).await
        }
    }
}
