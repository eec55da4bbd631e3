use crate::db::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Error body shape shared by every non-2xx JSON response.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("player not found")]
    PlayerNotFound,
    #[error("lineup not found")]
    LineupNotFound,
    #[error("id cannot be set on create")]
    IdSetOnCreate,
    #[error("`limit` cannot be greater than 100")]
    LimitTooLarge,
    #[error("lineup has reached maximum players")]
    LineupFull,
    #[error(transparent)]
    Cache(#[from] shared::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::PlayerNotFound => ApiError::PlayerNotFound,
            DbError::LineupNotFound => ApiError::LineupNotFound,
            DbError::LineupFull => ApiError::LineupFull,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::PlayerNotFound | ApiError::LineupNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            // Explicit ids on create are rejected with a bare status.
            ApiError::IdSetOnCreate => {
                return StatusCode::UNPROCESSABLE_ENTITY.into_response();
            }
            ApiError::LimitTooLarge => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::LineupFull => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::Cache(err) => {
                error!(error = %err, "cache layer failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                error!(detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
