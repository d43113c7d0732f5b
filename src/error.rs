use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A storage call failed. Only `message` reaches the client.
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Database { message, source } => {
                tracing::error!("{}: {}", message, source);
                message.to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                msg
            }
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                msg
            }
            AppError::Unauthorized => "Unauthorized".to_string(),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Attaches the client-facing message to a failed storage call.
pub trait StorageContext<T> {
    fn storage_context(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> StorageContext<T> for Result<T, sqlx::Error> {
    fn storage_context(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Database { message, source })
    }
}
