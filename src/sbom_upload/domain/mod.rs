pub mod credential;
pub mod upload_input;
pub mod upload_outcome;
pub mod upload_report;
pub mod upload_target;

pub use credential::Credential;
pub use upload_input::UploadInput;
pub use upload_outcome::UploadOutcome;
pub use upload_report::UploadReport;
pub use upload_target::UploadTarget;
