use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_)
            | AppError::DatabaseError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client errors carry their message verbatim; server errors keep the
        // raw cause in `details`.
        let body = match self {
            AppError::BadRequest(err) | AppError::NotFound(err) => ErrorResponse {
                error: err.to_string(),
                details: None,
            },
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Internal server error");
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    details: Some(format!("{:#}", err)),
                }
            }
            AppError::DatabaseError(err) => {
                tracing::error!(error = %err, "Database error");
                ErrorResponse {
                    error: "Database error".to_string(),
                    details: Some(format!("{:#}", err)),
                }
            }
            AppError::ConfigError(err) => ErrorResponse {
                error: "Configuration error".to_string(),
                details: Some(err.to_string()),
            },
        };

        (status, Json(body)).into_response()
    }
}
