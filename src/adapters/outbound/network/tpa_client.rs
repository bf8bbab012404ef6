use crate::ports::outbound::{SbomUploader, TokenProvider};
use crate::sbom_upload::domain::{UploadOutcome, UploadTarget};
use crate::shared::error::UploadError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::path::Path;
use std::time::Duration;

/// TpaClient adapter for uploading SBOMs to a TPA instance
///
/// Implements the SbomUploader port. Every call fetches a credential from
/// the injected TokenProvider, so token caching and refresh stay the
/// provider's business.
///
/// # Behavior
/// - One POST per call, no retries (retrying is the use case's decision)
/// - Any error is reported as a failure outcome for the target
pub struct TpaClient<T: TokenProvider> {
    client: reqwest::Client,
    base_url: String,
    auth: T,
}

impl<T: TokenProvider> TpaClient<T> {
    const UPLOAD_PATH: &'static str = "api/v2/sbom";
    /// Maximum number of response body bytes quoted in a failure detail
    const MAX_ERROR_BODY_LEN: usize = 200;

    /// Creates a new TPA client
    ///
    /// # Arguments
    /// * `base_url` - Root URL of the TPA instance
    /// * `auth` - Token provider shared by all uploads of this client
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: impl Into<String>, auth: T, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-uploader/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            auth,
        })
    }

    /// Full URL of the SBOM upload endpoint
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            Self::UPLOAD_PATH
        )
    }

    fn content_type_for(path: &Path) -> &'static str {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => "application/json",
            _ => "application/octet-stream",
        }
    }

    async fn try_upload(&self, target: &UploadTarget) -> Result<()> {
        let credential = self.auth.get_token().await?;

        let body = tokio::fs::read(target.path())
            .await
            .map_err(|e| UploadError::FileRead {
                path: target.path().to_path_buf(),
                details: e.to_string(),
            })?;

        let response = self
            .client
            .post(self.upload_url())
            .bearer_auth(credential.token())
            .header(CONTENT_TYPE, Self::content_type_for(target.path()))
            .body(body)
            .send()
            .await
            .map_err(|e| UploadError::Upload {
                path: target.path().to_path_buf(),
                details: format!("request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            let details = if body.is_empty() {
                format!("TPA returned status code {}", status)
            } else {
                let snippet: String = body.chars().take(Self::MAX_ERROR_BODY_LEN).collect();
                format!("TPA returned status code {}: {}", status, snippet)
            };
            return Err(UploadError::Upload {
                path: target.path().to_path_buf(),
                details,
            }
            .into());
        }

        Ok(())
    }
}

#[async_trait]
impl<T: TokenProvider> SbomUploader for TpaClient<T> {
    async fn upload(&self, target: &UploadTarget) -> UploadOutcome {
        match self.try_upload(target).await {
            Ok(()) => UploadOutcome::success(target.clone()),
            Err(e) => UploadOutcome::failure(target.clone(), e.to_string()),
        }
    }
}
