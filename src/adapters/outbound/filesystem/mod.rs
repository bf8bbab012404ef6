/// Filesystem adapters for discovery and report output
mod file_discovery;
mod file_writer;

pub use file_discovery::FileSystemDiscovery;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
