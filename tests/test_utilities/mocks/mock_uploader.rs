use async_trait::async_trait;
use sbom_uploader::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock SbomUploader that records every call and fails files by name
#[derive(Default, Clone)]
pub struct MockUploader {
    failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads of a file with this name report a failure
    pub fn failing_on(mut self, file_name: &str) -> Self {
        self.failing.insert(file_name.to_string());
        self
    }

    pub fn uploaded_paths(&self) -> Vec<PathBuf> {
        let mut paths = self.calls.lock().unwrap().clone();
        paths.sort();
        paths
    }
}

#[async_trait]
impl SbomUploader for MockUploader {
    async fn upload(&self, target: &UploadTarget) -> UploadOutcome {
        self.calls.lock().unwrap().push(target.path().to_path_buf());

        if self.failing.contains(&target.file_name()) {
            UploadOutcome::failure(target.clone(), "TPA returned status code 500")
        } else {
            UploadOutcome::success(target.clone())
        }
    }
}
