//! Request-level errors and their HTTP mapping.
//!
//! Every variant is terminal for the request that raised it; nothing here is
//! fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student not found in this activity")]
    NotRegistered,

    #[error("Missing required query parameter: email")]
    MissingEmail,

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound | ActivityError::NotRegistered => StatusCode::NOT_FOUND,
            ActivityError::AlreadyRegistered => StatusCode::BAD_REQUEST,
            ActivityError::MissingEmail | ActivityError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_error_to_its_status() {
        assert_eq!(ActivityError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ActivityError::NotRegistered.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ActivityError::AlreadyRegistered.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ActivityError::MissingEmail.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ActivityError::InvalidQuery("bad".to_string()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn response_carries_status() {
        let response = ActivityError::AlreadyRegistered.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
