/// Mock implementations for testing
mod capturing_presenter;
mod mock_progress_reporter;
mod mock_uploader;

pub use capturing_presenter::CapturingPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_uploader::MockUploader;
