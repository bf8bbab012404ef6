use crate::application::dto::{UploadRequest, UploadResponse};
use crate::ports::outbound::{OutputPresenter, ProgressReporter, SbomDiscovery, SbomUploader};
use crate::sbom_upload::domain::{UploadOutcome, UploadTarget};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;

/// Base delay between attempts for the same file (milliseconds)
/// The n-th retry waits n times this long.
const RETRY_BACKOFF_MS: u64 = 200;

/// UploadSbomsUseCase - Core use case for uploading SBOMs
///
/// Orchestrates a run: discover the files, upload them through a bounded
/// pool of workers, collect one outcome per file and emit the report.
///
/// A run moves through `Discovering → Dispatching → Collecting → Reported`.
/// Only a discovery error ends it early; every error raised while
/// uploading a file, including a panicking uploader, is turned into a
/// failure outcome for that file and the rest of the batch carries on.
///
/// # Type Parameters
/// * `D` - SbomDiscovery implementation
/// * `U` - SbomUploader implementation, shared by all workers
/// * `PR` - ProgressReporter implementation
/// * `OP` - OutputPresenter implementation for the report
pub struct UploadSbomsUseCase<D, U, PR, OP> {
    discovery: D,
    uploader: Arc<U>,
    progress_reporter: PR,
    output_presenter: OP,
}

impl<D, U, PR, OP> UploadSbomsUseCase<D, U, PR, OP>
where
    D: SbomDiscovery,
    U: SbomUploader + 'static,
    PR: ProgressReporter,
    OP: OutputPresenter,
{
    /// Creates a new UploadSbomsUseCase with injected dependencies
    pub fn new(discovery: D, uploader: U, progress_reporter: PR, output_presenter: OP) -> Self {
        Self {
            discovery,
            uploader: Arc::new(uploader),
            progress_reporter,
            output_presenter,
        }
    }

    /// Executes one upload run
    ///
    /// # Returns
    /// UploadResponse with every outcome, the report and the aggregate flag
    ///
    /// # Errors
    /// Returns an error if discovery fails or if the report cannot be
    /// written. Upload failures are never returned as errors.
    pub async fn execute(&self, request: UploadRequest) -> Result<UploadResponse> {
        // Step 1: Discover upload targets
        let targets = self.discover(&request)?;

        // Step 2: Upload and collect outcomes
        let outcomes = if targets.is_empty() {
            Vec::new()
        } else {
            self.upload_all(targets, &request).await
        };

        // Step 3: Summarize and emit
        let response = UploadResponse::new(outcomes);
        self.report_summary(&response);

        if request.emit_report() {
            self.output_presenter.present(&response.report.to_json()?)?;
        }

        Ok(response)
    }

    fn discover(&self, request: &UploadRequest) -> Result<Vec<UploadTarget>> {
        self.progress_reporter.report(&format!(
            "🔍 Looking for SBOMs in: {}",
            request.input().path().display()
        ));

        let targets = self.discovery.gather(request.input())?;

        self.progress_reporter
            .report(&format!("📦 Found {} file(s) to upload", targets.len()));

        Ok(targets)
    }

    /// Uploads all targets with at most `workers` in flight
    ///
    /// Targets are pulled from a shared queue as slots free up, so a slow
    /// file does not hold back the others. Outcomes arrive in completion
    /// order and are returned in discovery order.
    async fn upload_all(
        &self,
        targets: Vec<UploadTarget>,
        request: &UploadRequest,
    ) -> Vec<UploadOutcome> {
        let total = targets.len();
        let max_attempts = request.max_attempts();

        self.progress_reporter.report(&format!(
            "🚀 Uploading with {} worker(s)...",
            request.workers()
        ));

        let mut in_flight = stream::iter(targets.into_iter().enumerate())
            .map(|(index, target)| {
                let uploader = Arc::clone(&self.uploader);
                async move {
                    let outcome = Self::upload_with_retry(uploader, target, max_attempts).await;
                    (index, outcome)
                }
            })
            .buffer_unordered(request.workers());

        let mut collected: Vec<(usize, UploadOutcome)> = Vec::with_capacity(total);
        while let Some((index, outcome)) = in_flight.next().await {
            if let Some(detail) = outcome.detail() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to upload {}: {}",
                    outcome.target(),
                    detail
                ));
            }
            let name = outcome.target().file_name();
            collected.push((index, outcome));
            self.progress_reporter
                .report_progress(collected.len(), total, Some(&name));
        }

        collected.sort_by_key(|(index, _)| *index);
        collected.into_iter().map(|(_, outcome)| outcome).collect()
    }

    /// Uploads one target, retrying failed attempts up to `max_attempts`
    async fn upload_with_retry(
        uploader: Arc<U>,
        target: UploadTarget,
        max_attempts: usize,
    ) -> UploadOutcome {
        let mut attempt = 1;
        loop {
            let outcome = Self::upload_isolated(Arc::clone(&uploader), target.clone()).await;
            if outcome.is_success() || attempt >= max_attempts {
                return outcome;
            }
            tokio::time::sleep(Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64)).await;
            attempt += 1;
        }
    }

    /// Runs a single attempt on its own task so a panic stays contained
    async fn upload_isolated(uploader: Arc<U>, target: UploadTarget) -> UploadOutcome {
        let task_target = target.clone();
        let handle = tokio::spawn(async move { uploader.upload(&task_target).await });

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => UploadOutcome::failure(
                target,
                format!("Upload worker terminated unexpectedly: {}", e),
            ),
        }
    }

    fn report_summary(&self, response: &UploadResponse) {
        let succeeded = response.report.success.len();
        let failed = response.report.failure.len();
        let total = response.report.total();

        if response.success {
            self.progress_reporter.report_completion(&format!(
                "✅ Upload complete: {} of {} file(s) uploaded",
                succeeded, total
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "❌ Upload finished with failures: {} succeeded out of {}, {} failed",
                succeeded, total, failed
            ));
        }
    }
}
