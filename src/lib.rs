//! sbom-uploader - bulk SBOM upload to a TPA instance
//!
//! This library uploads Software Bill of Materials files, one file or a
//! whole directory tree, to a TPA service. Uploads run on a bounded pool of
//! workers that share one cached bearer token, and every file ends up in
//! exactly one of the `success` / `failure` lists of the run report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_upload`): Upload targets, outcomes, credentials and the report
//! - **Application Layer** (`application`): The upload use case, request/response DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem discovery, OIDC and TPA HTTP clients, console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_uploader::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let token_provider = StaticTokenProvider::new("my-token");
//! let uploader = TpaClient::new(
//!     "https://tpa.example.com",
//!     token_provider,
//!     Duration::from_secs(300),
//! )?;
//!
//! // Create use case
//! let use_case = UploadSbomsUseCase::new(
//!     FileSystemDiscovery::new(),
//!     uploader,
//!     StderrProgressReporter::new(),
//!     StdoutPresenter::new(),
//! );
//!
//! // Execute
//! let request = UploadRequest::builder()
//!     .input(UploadInput::Directory(PathBuf::from("./sboms")))
//!     .workers(4)
//!     .emit_report(true)
//!     .build()?;
//! let response = use_case.execute(request).await?;
//! assert_eq!(response.success, response.report.failure.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_upload;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDiscovery, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{
        OidcClientCredentials, StaticTokenProvider, TpaClient,
    };
    pub use crate::application::dto::{UploadRequest, UploadResponse};
    pub use crate::application::factories::{CredentialSource, TokenProviderFactory};
    pub use crate::application::use_cases::UploadSbomsUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, SbomDiscovery, SbomUploader, TokenProvider,
    };
    pub use crate::sbom_upload::domain::{
        Credential, UploadInput, UploadOutcome, UploadReport, UploadTarget,
    };
    pub use crate::shared::Result;
}
