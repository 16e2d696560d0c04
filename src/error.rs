use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream request failed: {0:#}")]
    Upstream(#[from] anyhow::Error),
}

impl ResolveError {
    pub fn validation(message: impl Into<String>) -> Self {
        ResolveError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ResolveError::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ResolveError::Validation(_) => StatusCode::BAD_REQUEST,
            ResolveError::NotFound(_) => StatusCode::NOT_FOUND,
            ResolveError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
