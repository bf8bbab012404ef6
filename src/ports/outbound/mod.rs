/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_discovery;
pub mod sbom_uploader;
pub mod token_provider;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_discovery::SbomDiscovery;
pub use sbom_uploader::SbomUploader;
pub use token_provider::TokenProvider;
