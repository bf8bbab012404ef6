use crate::sbom_upload::domain::{UploadInput, UploadTarget};
use crate::shared::Result;

/// SbomDiscovery port for turning user input into upload targets
pub trait SbomDiscovery {
    /// Resolves `input` to the ordered list of files to upload
    ///
    /// A file input yields exactly that file. A directory input yields every
    /// regular file below it, each exactly once.
    ///
    /// # Errors
    /// Returns `UploadError::Discovery` if a directory input cannot be
    /// walked.
    fn gather(&self, input: &UploadInput) -> Result<Vec<UploadTarget>>;
}
