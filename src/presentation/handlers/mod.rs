mod catalog;
mod error;
mod health;
mod identify;
mod upload;

pub use catalog::{
    ExamplesResponse, SupportedFormat, SupportedFormatsResponse, examples_handler,
    supported_formats_handler, taxonomy_handler,
};
pub use error::{ApiError, ErrorResponse};
pub use health::{HealthResponse, SERVICE_NAME, health_handler};
pub use identify::{IdentifyRequest, IdentifyResponse, identify_handler};
pub use upload::{FILE_FIELD, UploadResponse, upload_handler};
