use crate::ports::outbound::SbomDiscovery;
use crate::sbom_upload::domain::{UploadInput, UploadTarget};
use crate::shared::error::UploadError;
use crate::shared::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemDiscovery adapter for finding SBOM files on disk
///
/// This adapter implements the SbomDiscovery port. Directories are walked
/// recursively; every regular file is an upload candidate, regardless of
/// its extension.
///
/// # Symbolic links
/// Links are followed. Each directory is entered, and each file collected,
/// at most once per canonical path, which also breaks link cycles.
/// Dangling links are skipped.
pub struct FileSystemDiscovery;

impl FileSystemDiscovery {
    pub fn new() -> Self {
        Self
    }

    fn walk_root(root: &Path) -> Result<Vec<UploadTarget>> {
        let metadata = fs::metadata(root).map_err(|e| UploadError::Discovery {
            path: root.to_path_buf(),
            reason: format!("Failed to read directory metadata: {}", e),
        })?;

        if !metadata.is_dir() {
            return Err(UploadError::Discovery {
                path: root.to_path_buf(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        let root = std::path::absolute(root).map_err(|e| UploadError::Discovery {
            path: root.to_path_buf(),
            reason: format!("Failed to resolve absolute path: {}", e),
        })?;

        let mut visited = HashSet::new();
        let mut targets = Vec::new();
        Self::walk(&root, &mut visited, &mut targets)?;
        Ok(targets)
    }

    fn walk(
        dir: &Path,
        visited: &mut HashSet<PathBuf>,
        targets: &mut Vec<UploadTarget>,
    ) -> Result<()> {
        let canonical = dir.canonicalize().map_err(|e| UploadError::Discovery {
            path: dir.to_path_buf(),
            reason: format!("Failed to canonicalize directory: {}", e),
        })?;
        if !visited.insert(canonical) {
            return Ok(());
        }

        let mut entries = fs::read_dir(dir)
            .and_then(|entries| {
                entries
                    .map(|entry| entry.map(|e| e.path()))
                    .collect::<std::io::Result<Vec<PathBuf>>>()
            })
            .map_err(|e| UploadError::Discovery {
                path: dir.to_path_buf(),
                reason: format!("Failed to read directory: {}", e),
            })?;
        // read_dir order is platform dependent
        entries.sort();

        for path in entries {
            // fs::metadata follows links; an error here means a dangling link.
            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };

            if metadata.is_dir() {
                Self::walk(&path, visited, targets)?;
            } else if metadata.is_file() {
                // A file reached through several links is uploaded once,
                // under the first path seen in walk order.
                let Ok(canonical) = path.canonicalize() else {
                    continue;
                };
                if visited.insert(canonical) {
                    targets.push(UploadTarget::new(&path)?);
                }
            }
        }

        Ok(())
    }
}

impl Default for FileSystemDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomDiscovery for FileSystemDiscovery {
    fn gather(&self, input: &UploadInput) -> Result<Vec<UploadTarget>> {
        match input {
            UploadInput::File(path) => Ok(vec![UploadTarget::new(path)?]),
            UploadInput::Directory(dir) => Self::walk_root(dir),
        }
    }
}
