//! Error types for the analyzer server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Shown to the uploader whenever no text could be obtained
pub const UNREADABLE_DETAIL: &str =
    "Could not read text (try a clearer PDF/DOCX or enable OCR build).";

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Decoding, OCR or the deadline failed, or the text was empty
    #[error("Could not read document text")]
    Unreadable,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ServerError::Unreadable => {
                (StatusCode::UNPROCESSABLE_ENTITY, UNREADABLE_DETAIL.to_string())
            }
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<clause_engine::EngineError> for ServerError {
    fn from(err: clause_engine::EngineError) -> Self {
        match err {
            clause_engine::EngineError::EmptyDocument => ServerError::Unreadable,
        }
    }
}

impl From<doc_text::ExtractError> for ServerError {
    fn from(_: doc_text::ExtractError) -> Self {
        ServerError::Unreadable
    }
}
