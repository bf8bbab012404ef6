use crate::ports::outbound::TokenProvider;
use crate::sbom_upload::domain::Credential;
use crate::shared::error::UploadError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// OidcClientCredentials adapter for the OAuth2 client-credentials grant
///
/// Implements the TokenProvider port. The token is cached behind an async
/// mutex and the freshness check and the refresh both happen while holding
/// it, so concurrent callers that find the token stale queue up behind a
/// single exchange and then read its result.
pub struct OidcClientCredentials {
    client: reqwest::Client,
    token_url: String,
    account: String,
    secret: String,
    cached: Mutex<Option<Credential>>,
}

impl OidcClientCredentials {
    const TIMEOUT_SECONDS: u64 = 30;
    /// Tokens with less validity than this left are refreshed before use
    const EXPIRY_SKEW_SECONDS: i64 = 30;
    /// Lifetime assumed when the token endpoint omits `expires_in`
    const DEFAULT_EXPIRES_IN_SECONDS: i64 = 300;

    /// Creates a new client-credentials provider
    ///
    /// # Arguments
    /// * `token_url` - OAuth2 token endpoint
    /// * `account` - Client id
    /// * `secret` - Client secret
    pub fn new(
        token_url: impl Into<String>,
        account: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-uploader/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            token_url: token_url.into(),
            account: account.into(),
            secret: secret.into(),
            cached: Mutex::new(None),
        })
    }

    /// Performs one token exchange against the token endpoint
    async fn exchange(&self) -> Result<Credential> {
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.account, Some(&self.secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| UploadError::Authentication {
                details: format!("Token request to {} failed: {}", self.token_url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Authentication {
                details: format!("Token endpoint returned status code {}", status),
            }
            .into());
        }

        let payload: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| UploadError::Authentication {
                    details: format!("Malformed token response: {}", e),
                })?;

        if payload.access_token.trim().is_empty() {
            return Err(UploadError::Authentication {
                details: "Token endpoint returned an empty access_token".to_string(),
            }
            .into());
        }

        let expires_at = Self::expiry_from(Utc::now(), payload.expires_in)?;
        Ok(Credential::new(payload.access_token, expires_at))
    }

    /// Turns the endpoint's `expires_in` into an absolute expiry
    ///
    /// Non-positive lifetimes and lifetimes past chrono's range are
    /// malformed responses.
    fn expiry_from(now: DateTime<Utc>, expires_in: Option<i64>) -> Result<DateTime<Utc>> {
        let expires_in = expires_in.unwrap_or(Self::DEFAULT_EXPIRES_IN_SECONDS);
        if expires_in <= 0 {
            return Err(UploadError::Authentication {
                details: format!(
                    "Token endpoint returned a non-positive expires_in ({})",
                    expires_in
                ),
            }
            .into());
        }

        TimeDelta::try_seconds(expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                UploadError::Authentication {
                    details: format!(
                        "Token endpoint returned an out-of-range expires_in ({})",
                        expires_in
                    ),
                }
                .into()
            })
    }
}

#[async_trait]
impl TokenProvider for OidcClientCredentials {
    async fn get_token(&self) -> Result<Credential> {
        let mut cached = self.cached.lock().await;

        if let Some(credential) = cached.as_ref() {
            if credential.is_valid_at(Utc::now(), TimeDelta::seconds(Self::EXPIRY_SKEW_SECONDS)) {
                return Ok(credential.clone());
            }
        }

        // A failed exchange leaves the cache empty so the next caller retries.
        *cached = None;
        let fresh = self.exchange().await?;
        *cached = Some(fresh.clone());
        Ok(fresh)
    }
}
