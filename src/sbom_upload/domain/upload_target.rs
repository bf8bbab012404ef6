use crate::shared::error::UploadError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// NewType wrapper for the absolute path of one SBOM file to upload
///
/// Relative paths are resolved against the current working directory when
/// the target is created. The file itself is not touched, so a target may
/// point at a file that no longer exists by the time it is uploaded; that
/// surfaces as a failed upload, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UploadTarget(PathBuf);

impl UploadTarget {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).map_err(|e| UploadError::Discovery {
            path: path.to_path_buf(),
            reason: format!("Failed to resolve absolute path: {}", e),
        })?;
        Ok(Self(absolute))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name used in progress messages
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

impl std::fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
