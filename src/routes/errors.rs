use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use crate::core::MatchError;
use crate::models::{ErrorResponse, MAX_TEXT_LENGTH};

/// Errors surfaced to API callers as `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing 'text' field in payload")]
    MissingText,

    #[error("'text' exceeds {} characters", MAX_TEXT_LENGTH)]
    TextTooLong,

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Internal(String),
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingText | ApiError::TextTooLong | ApiError::InvalidJson(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            tracing::error!("Internal error: {}", msg);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// JSON extractor config that reports payload errors in the API's error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}
