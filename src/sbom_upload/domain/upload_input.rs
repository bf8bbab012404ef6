use std::path::{Path, PathBuf};

/// What the user asked to upload: one file, or everything below a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadInput {
    File(PathBuf),
    Directory(PathBuf),
}

impl UploadInput {
    pub fn path(&self) -> &Path {
        match self {
            UploadInput::File(path) | UploadInput::Directory(path) => path,
        }
    }
}
