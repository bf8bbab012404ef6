/// Data Transfer Objects for application layer
///
/// DTOs carry the run parameters into the use case and the collected
/// results back out to the CLI.
mod upload_request;
mod upload_response;

pub use upload_request::{UploadRequest, UploadRequestBuilder};
pub use upload_response::UploadResponse;
