/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe everything the upload use case needs from the
/// outside world: credentials, the TPA service, the filesystem and the
/// console.
pub mod outbound;
