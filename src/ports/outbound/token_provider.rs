use crate::sbom_upload::domain::Credential;
use crate::shared::Result;
use async_trait::async_trait;

/// TokenProvider port for obtaining bearer tokens
///
/// A single provider instance is shared by every concurrent upload of a
/// run, so implementations must be `Send + Sync` and must serialize their
/// own refreshes.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a credential that is valid for at least the immediate request
    ///
    /// # Errors
    /// Returns `UploadError::Authentication` if a new token was needed and
    /// could not be obtained.
    async fn get_token(&self) -> Result<Credential>;
}

#[async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for Box<T> {
    async fn get_token(&self) -> Result<Credential> {
        (**self).get_token().await
    }
}
