use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a partially failed batch
/// from a run that could not start at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every SBOM was uploaded
    Success = 0,
    /// At least one SBOM failed to upload
    UploadFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad input path, config error, client setup, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps the aggregate upload flag to an exit code
    pub fn from_upload_success(success: bool) -> Self {
        if success {
            ExitCode::Success
        } else {
            ExitCode::UploadFailed
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UploadFailed => write!(f, "Upload Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM uploads.
///
/// Only `Discovery` and `Configuration` ever abort a run. The other
/// variants are raised inside a single upload attempt and end up as the
/// detail string of that target's failure outcome.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Pass an existing file with --file or an existing directory with --from-dir")]
    Discovery { path: PathBuf, reason: String },

    #[error("Failed to obtain an access token\nDetails: {details}\n\n💡 Hint: Check TPA_SSO_TOKEN_URL, TPA_SSO_ACCOUNT and TPA_SSO_TOKEN")]
    Authentication { details: String },

    #[error("Failed to upload {path}: {details}")]
    Upload { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}
