use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

/// Error taxonomy for the whole request path: `NotFound` and
/// `InvalidArgument` map to client errors, everything else is a
/// server-side data-access failure.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("todo not found: {0}")]
    NotFound(i32),

    #[error("invalid request: {0}")]
    InvalidArgument(String),

    #[error("database error: {0}")]
    DataAccess(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(String),

    #[error("migration error: {0}")]
    Migration(String),
}

impl ResponseError for TodoError {
    fn status_code(&self) -> StatusCode {
        match self {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            TodoError::DataAccess(_) | TodoError::Pool(_) | TodoError::Migration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
