//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("store backend '{0}' is not compiled in (enable the `{0}` feature)")]
    BackendUnavailable(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[cfg(feature = "mongodb")]
    #[error("mongodb: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("store: {0}")]
    Store(String),
}

impl AppError {
    /// "List not found"; the one not-found message the API emits.
    pub fn list_not_found() -> Self {
        AppError::NotFound("List not found".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Db(_) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            #[cfg(feature = "mongodb")]
            AppError::Mongo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body, without the log prefix.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(m)
            | AppError::Validation(m)
            | AppError::BadRequest(m)
            | AppError::Store(m) => m.clone(),
            AppError::Config(e) => e.to_string(),
            AppError::Db(e) => e.to_string(),
            #[cfg(feature = "mongodb")]
            AppError::Mongo(e) => e.to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ErrorBody {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
