// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the locator service

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure path the boundary layer has to tell apart
/// Each variant maps to its own HTTP status code and error code
#[derive(Error, Debug)]
pub enum LocatorError {
    /// Malformed or missing request input, rejected before the core runs
    #[error("{0}")]
    ValidationError(String),

    /// The provider call failed or returned something unusable
    /// `status` is the provider's HTTP status when one was received
    #[error("Upstream provider error: {message}")]
    UpstreamError {
        status: Option<u16>,
        message: String,
    },

    /// The provider answered, but no city could be extracted
    #[error("City not found")]
    CityNotFound,
}

impl LocatorError {
    /// Build an upstream error for a failure that never got an HTTP status
    pub fn upstream(message: impl Into<String>) -> Self {
        LocatorError::UpstreamError {
            status: None,
            message: message.into(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            LocatorError::ValidationError(_) => "VALIDATION_ERROR",
            LocatorError::UpstreamError { .. } => "UPSTREAM_ERROR",
            LocatorError::CityNotFound => "CITY_NOT_FOUND",
        }
    }
}

/// Convert LocatorError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for LocatorError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        if let LocatorError::UpstreamError {
            status: Some(status),
            ..
        } = self
        {
            body["error"]["upstream_status"] = json!(status);
        }

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LocatorError::ValidationError(_) => StatusCode::BAD_REQUEST,
            LocatorError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            LocatorError::CityNotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            LocatorError::ValidationError("Missing lat/lng".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(LocatorError::CityNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            LocatorError::upstream("connection refused").status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_upstream_message_keeps_diagnostics() {
        let err = LocatorError::UpstreamError {
            status: Some(401),
            message: "Invalid apiKey".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream provider error: Invalid apiKey");
    }

    #[actix_web::test]
    async fn test_error_body() {
        let err = LocatorError::UpstreamError {
            status: Some(401),
            message: "Invalid apiKey".to_string(),
        };
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert_eq!(body["error"]["upstream_status"], 401);
    }
}
