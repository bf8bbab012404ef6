use crate::sbom_upload::domain::UploadInput;
use crate::shared::error::UploadError;
use crate::shared::Result;

/// UploadRequest - Parameters of one upload run
///
/// Immutable for the lifetime of the run. Construct it through
/// [`UploadRequest::builder`], which rejects a zero worker count or a zero
/// attempt count.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    input: UploadInput,
    workers: usize,
    max_attempts: usize,
    emit_report: bool,
}

impl UploadRequest {
    pub fn builder() -> UploadRequestBuilder {
        UploadRequestBuilder::default()
    }

    pub fn input(&self) -> &UploadInput {
        &self.input
    }

    /// Maximum number of uploads in flight at once
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Attempts per file, including the first one
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Whether the finished report is handed to the output presenter
    pub fn emit_report(&self) -> bool {
        self.emit_report
    }
}

/// Builder for [`UploadRequest`]
#[derive(Debug, Clone)]
pub struct UploadRequestBuilder {
    input: Option<UploadInput>,
    workers: usize,
    max_attempts: usize,
    emit_report: bool,
}

impl Default for UploadRequestBuilder {
    fn default() -> Self {
        Self {
            input: None,
            workers: 1,
            max_attempts: 1,
            emit_report: false,
        }
    }
}

impl UploadRequestBuilder {
    pub fn input(mut self, input: UploadInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn emit_report(mut self, emit_report: bool) -> Self {
        self.emit_report = emit_report;
        self
    }

    pub fn build(self) -> Result<UploadRequest> {
        let input = self.input.ok_or_else(|| UploadError::Configuration {
            message: "an input file or directory is required".to_string(),
        })?;

        if self.workers == 0 {
            return Err(UploadError::Configuration {
                message: "workers must be at least 1".to_string(),
            }
            .into());
        }

        if self.max_attempts == 0 {
            return Err(UploadError::Configuration {
                message: "retries must be at least 1".to_string(),
            }
            .into());
        }

        Ok(UploadRequest {
            input,
            workers: self.workers,
            max_attempts: self.max_attempts,
            emit_report: self.emit_report,
        })
    }
}
