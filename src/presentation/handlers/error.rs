use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoaderError, LlmClientError};
use crate::application::services::{ClassificationError, IdentificationError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

/// An error that has already been mapped onto an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    raw_response: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            raw_response: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<IdentificationError> for ApiError {
    fn from(error: IdentificationError) -> Self {
        let status = match &error {
            IdentificationError::Extraction(FileLoaderError::UnsupportedContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            IdentificationError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IdentificationError::InputTooShort { .. } => StatusCode::BAD_REQUEST,
            IdentificationError::Splitting(_) => StatusCode::INTERNAL_SERVER_ERROR,
            IdentificationError::Classification(ClassificationError::Parse { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            IdentificationError::Classification(ClassificationError::Oracle(oracle)) => {
                match oracle {
                    LlmClientError::RateLimited
                    | LlmClientError::ApiRequestFailed(_)
                    | LlmClientError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
                    LlmClientError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
        };

        let message = error.to_string();
        let raw_response = match error {
            IdentificationError::Classification(ClassificationError::Parse {
                raw_response, ..
            }) => Some(raw_response),
            _ => None,
        };

        Self {
            status,
            message,
            raw_response,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            tracing::warn!(status = %self.status, error = %self.message, "Request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                success: false,
                error: self.message,
                raw_response: self.raw_response,
            }),
        )
            .into_response()
    }
}
