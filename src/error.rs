use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors raised while loading and normalizing the dataset.
///
/// All of these are fatal for the load: the caller either falls back to
/// another source (cache → raw file) or serves in the unavailable state.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("dataset has neither a Name nor a Genre column")]
    MissingRequiredColumns,

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Recoverable per-operation conditions from the recommendation engine.
///
/// These are returned as values and rendered as user-facing "not available"
/// messages, never propagated as panics.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("the dataset contains no rated movies")]
    NoRatedMovies,

    #[error("the dataset is empty")]
    EmptyTable,
}

/// Application-level errors surfaced over the HTTP API
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("movie dataset is unavailable")]
    DatasetUnavailable,

    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::DatasetUnavailable => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            AppError::Recommend(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
