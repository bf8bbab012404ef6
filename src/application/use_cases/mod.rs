/// Use cases module containing application business logic orchestration
mod upload_sboms;

pub use upload_sboms::UploadSbomsUseCase;
