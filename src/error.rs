// HTTP API Error Types
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::database::manager::DatabaseError;

/// Message returned for any failure the client cannot act on
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// Unique constraints the API knows how to explain, with their client messages
const DUPLICATE_MESSAGES: &[(&str, &str)] = &[
    ("states_pkey", "The state already exists."),
    ("cities_name", "The city already exists."),
    ("temp_date", "The temp already exists for this date."),
];

/// Client-facing message for a violated unique constraint, if it is a known one
pub fn duplicate_message(constraint: &str) -> Option<&'static str> {
    DUPLICATE_MESSAGES
        .iter()
        .find(|(name, _)| *name == constraint)
        .map(|(_, message)| *message)
}

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    /// A row written moments ago could not be read back
    pub fn inserted_row_missing(entity: &str, key: impl std::fmt::Display) -> Self {
        tracing::error!("Inserted {} {} could not be read back", entity, key);
        ApiError::internal_server_error(GENERIC_ERROR_MESSAGE)
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation { constraint } => match duplicate_message(&constraint) {
                Some(message) => ApiError::bad_request(message),
                None => {
                    tracing::error!("Unexpected unique constraint violation: {}", constraint);
                    ApiError::internal_server_error(GENERIC_ERROR_MESSAGE)
                }
            },
            DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error(GENERIC_ERROR_MESSAGE)
            }
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::internal_server_error(GENERIC_ERROR_MESSAGE)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Errors go out as plain text with the matching status
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message().to_string(),
        )
            .into_response()
    }
}
