use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::EntryError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<EntryError> for ApiError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::NotFound(_) => Self::not_found(err.to_string()),
            EntryError::InvalidId(_)
            | EntryError::InvalidStatus(_)
            | EntryError::EmptyDescription => Self::bad_request(err.to_string()),
            EntryError::Storage(ref message) => {
                tracing::error!("Storage error: {}", message);
                Self::internal("storage error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EntryId;

    #[test]
    fn entry_errors_map_to_status_codes() {
        let cases = [
            (EntryError::NotFound(EntryId::new(1)), StatusCode::NOT_FOUND),
            (EntryError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (EntryError::InvalidStatus("done".into()), StatusCode::BAD_REQUEST),
            (EntryError::EmptyDescription, StatusCode::BAD_REQUEST),
            (
                EntryError::storage("connection reset"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let err = ApiError::from(EntryError::storage("password authentication failed"));
        assert!(!err.to_string().contains("password"));
    }
}
