use std::time::Duration;

use tracing::{debug, info};

use super::{Credentials, TokenGrant, TokenProvider};
use crate::error::{Error, Result};
use async_trait::async_trait;

/// Strava's production token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://www.strava.com/oauth/token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth2 token client backed by reqwest.
///
/// Each flow is a single request/response transaction: no caching, no
/// retries, a failed or timed-out call terminates the run.
pub struct OAuthClient {
    credentials: Credentials,
    token_url: String,
    http_client: reqwest::Client,
}

impl OAuthClient {
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            http_client,
        })
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    async fn request_token(&self, params: &[(&str, &str)]) -> Result<TokenGrant> {
        debug!("Requesting token from {}", self.token_url);

        let response = self
            .http_client
            .post(&self.token_url)
            .form(params)
            .send()
            .await
            .map_err(|e| Error::Connection(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(Error::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let grant: TokenGrant = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Failed to parse token response: {}", e)))?;

        info!("Obtained access token (expires_at: {:?})", grant.expires_at);

        Ok(grant)
    }
}

#[async_trait]
impl TokenProvider for OAuthClient {
    async fn exchange_code(&self, code: &str) -> Result<TokenGrant> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
        ];
        self.request_token(&params).await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenGrant> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];
        self.request_token(&params).await
    }
}
