pub mod error;
pub mod file;
pub mod types;

pub use error::ApiError;
pub use file::{FileMetadata, FileStats, MessageResponse, Setting};
pub use types::{DirectoryPath, EndpointVariant, Endpoints, FilePath, HttpVerb, Operation};
