use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error type for API endpoints
///
/// Maps every failure a handler can hit to an HTTP status code with a plain
/// message body, which is what the frontend consuming this API expects.
#[derive(Debug)]
pub enum ApiError {
    /// Path id the store cannot parse as an ObjectId
    InvalidObjectId(String),
    /// Upload route called without a required form field
    MissingField(&'static str),
    /// Multipart body could not be decoded
    Multipart(MultipartError),
    /// Request body was syntactically valid JSON but not storable
    InvalidBody(String),
    /// Document store operation failed
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidObjectId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid id format: expected a 24-character hex ObjectId, got '{}'", id),
            ),
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
            ),
            ApiError::Multipart(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid multipart body: {}", err),
            ),
            ApiError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", err),
            ),
        };

        (status, message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart(err)
    }
}
