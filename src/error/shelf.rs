use axum::{
    Json,
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ShelfError {
    #[error("Invalid form submission: {0}")]
    FormRejected(#[from] FormRejection),

    #[error("Missing form field: {0}")]
    MissingFormField(&'static str),

    #[error("Invalid book id: {0}")]
    BookIdRejected(#[from] PathRejection),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl IntoResponse for ShelfError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            ShelfError::DatabaseError(_) | ShelfError::RactorError(_) => {
                tracing::error!(error = %self, "storage failure while handling request");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                };
                (status, body)
            }

            ShelfError::FormRejected(rejection) => {
                tracing::warn!(error = %rejection, "book form rejected");
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorObject {
                    code: "INVALID_FORM".to_string(),
                    message: rejection.body_text(),
                    details: None,
                };
                (status, body)
            }

            ShelfError::MissingFormField(field) => {
                tracing::warn!(field, "book form missing a required field");
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorObject {
                    code: "INVALID_FORM".to_string(),
                    message: format!("missing form field: {field}"),
                    details: None,
                };
                (status, body)
            }

            ShelfError::BookIdRejected(rejection) => {
                tracing::warn!(error = %rejection, "book id path parameter rejected");
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorObject {
                    code: "INVALID_BOOK_ID".to_string(),
                    message: rejection.body_text(),
                    details: None,
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
