use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::desk::DeskError;
use crate::handlers::shared::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error{}", .0.as_ref().map_or("".to_string(), |s| format!(": {}", s)))]
    InternalServerError(Option<String>),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        if status_code.is_server_error() {
            log::error!(
                "Request failed with status {}: {}",
                status_code,
                error_message
            );
        } else {
            log::warn!(
                "Request rejected with status {}: {}",
                status_code,
                error_message
            );
        }

        let response_body = ApiResponse::<()>::error(&error_message);

        HttpResponse::build(status_code).json(response_body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        log::error!("Database error: {}", error);
        AppError::DatabaseError(error)
    }
}

impl From<DeskError> for AppError {
    fn from(error: DeskError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Validation failures can surface through repositories wrapped in anyhow.
        let error = match error.downcast::<DeskError>() {
            Ok(desk_err) => return desk_err.into(),
            Err(error) => error,
        };

        match error.downcast::<sqlx::Error>() {
            Ok(sqlx_err) => {
                log::error!("Database error: {}", sqlx_err);
                AppError::DatabaseError(sqlx_err)
            }
            Err(original_error) => {
                log::error!("Anyhow error: {}", original_error);
                AppError::InternalServerError(Some(original_error.to_string()))
            }
        }
    }
}

impl AppError {
    pub fn internal_server_error_message(message: impl Into<String>) -> Self {
        AppError::InternalServerError(Some(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desk_errors_map_to_bad_request() {
        let err: AppError = DeskError::MissingPickerName.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn anyhow_wrapped_desk_errors_keep_their_status() {
        let err: AppError = anyhow::Error::new(DeskError::EmptyNote).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad request: Handover note is empty");
    }

    #[test]
    fn other_anyhow_errors_are_internal() {
        let err: AppError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error: disk on fire");
    }
}
