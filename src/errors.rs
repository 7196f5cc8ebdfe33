use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::constants::messages;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{}", messages::GENERATION_FAILED)]
    GenerationFailed { submission_id: String },

    #[error("{}", messages::INCOHERENT_RESULT)]
    IncoherentResult { submission_id: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn submission_id(&self) -> Option<&str> {
        match self {
            AppError::GenerationFailed { submission_id }
            | AppError::IncoherentResult { submission_id } => Some(submission_id),
            _ => None,
        }
    }

    /// Message safe to show to a student. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                messages::INTERNAL_ERROR.to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::GenerationFailed { .. } | AppError::IncoherentResult { .. } => {
                StatusCode::BAD_GATEWAY
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            submission_id: self.submission_id().map(str::to_string),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        AppError::ValidationError(message)
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("test".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::GenerationFailed {
                submission_id: "abc".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::IncoherentResult {
                submission_id: "abc".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::DatabaseError("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound(messages::SUBMISSION_NOT_FOUND.into());
        assert_eq!(err.to_string(), "Submissão não encontrada.");

        let err = AppError::GenerationFailed {
            submission_id: "abc".into(),
        };
        assert_eq!(err.to_string(), messages::GENERATION_FAILED);
    }

    #[test]
    fn test_internal_details_are_not_public() {
        let err = AppError::DatabaseError("connection refused at 10.0.0.3".into());
        assert_eq!(err.public_message(), messages::INTERNAL_ERROR);
        assert!(err.to_string().contains("10.0.0.3"));
    }

    #[actix_web::test]
    async fn test_upstream_error_body_carries_submission_id() {
        let err = AppError::IncoherentResult {
            submission_id: "sub-1".into(),
        };
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["submissionId"], "sub-1");
        assert_eq!(json["error"], messages::INCOHERENT_RESULT);
    }

    #[actix_web::test]
    async fn test_validation_error_body_has_only_error() {
        let err = AppError::ValidationError(messages::PROMPT_TOO_LONG.into());
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Descrição muito longa!" }));
    }
}
