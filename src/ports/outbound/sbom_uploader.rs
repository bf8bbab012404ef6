use crate::sbom_upload::domain::{UploadOutcome, UploadTarget};
use async_trait::async_trait;

/// SbomUploader port for sending one SBOM file to TPA
///
/// The return type is the outcome itself rather than a `Result`:
/// implementations convert every error (auth, I/O, HTTP) into
/// `UploadOutcome::Failure` for the target they were given.
#[async_trait]
pub trait SbomUploader: Send + Sync {
    /// Performs exactly one upload attempt for `target`
    async fn upload(&self, target: &UploadTarget) -> UploadOutcome;
}
