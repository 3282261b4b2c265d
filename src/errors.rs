// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// SQLSTATEs raised by PostgreSQL on constraint violations
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Application-specific error types
/// DOCUMENTATION: Every failure a handler can surface
/// Each variant maps to one HTTP status code and a JSON error body
#[derive(Error, Debug)]
pub enum RentalError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Internal server error")]
    InternalError,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl RentalError {
    /// Map a failed INSERT/UPDATE, turning unique violations into 409
    /// and writes referencing a vanished row into 404
    /// DOCUMENTATION: `conflict` is the message returned to the client
    pub fn from_write(err: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    log::warn!("Unique constraint rejected write: {}", db_err.message());
                    return RentalError::AlreadyExists(conflict.to_string());
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    log::warn!("Foreign key rejected write: {}", db_err.message());
                    return RentalError::NotFound(
                        "A referenced record no longer exists.".to_string(),
                    );
                }
                _ => {}
            }
        }
        log::error!("Database write failed: {}", err);
        RentalError::DatabaseError(err.to_string())
    }

    fn code(&self) -> &'static str {
        match self {
            RentalError::NotFound(_) => "NOT_FOUND",
            RentalError::AlreadyExists(_) => "ALREADY_EXISTS",
            RentalError::Conflict(_) => "CONFLICT",
            RentalError::DatabaseError(_) => "DATABASE_ERROR",
            RentalError::InvalidInput(_) => "INVALID_INPUT",
            RentalError::ValidationError(_) => "VALIDATION_ERROR",
            RentalError::Unauthorized(_) => "UNAUTHORIZED",
            RentalError::Forbidden(_) => "FORBIDDEN",
            RentalError::InternalError => "INTERNAL_ERROR",
            RentalError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
        }
    }
}

impl From<validator::ValidationErrors> for RentalError {
    fn from(errors: validator::ValidationErrors) -> Self {
        RentalError::ValidationError(errors.to_string())
    }
}

impl From<bcrypt::BcryptError> for RentalError {
    fn from(err: bcrypt::BcryptError) -> Self {
        log::error!("Password hashing failed: {}", err);
        RentalError::InternalError
    }
}

/// Convert RentalError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for RentalError {
    fn error_response(&self) -> HttpResponse {
        // Never leak SQL details to clients
        let message = match self {
            RentalError::DatabaseError(_) => "Database error".to_string(),
            other => other.to_string(),
        };

        let body = json!({
            "error": {
                "code": self.code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            RentalError::NotFound(_) => StatusCode::NOT_FOUND,
            RentalError::AlreadyExists(_) | RentalError::Conflict(_) => StatusCode::CONFLICT,
            RentalError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RentalError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RentalError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RentalError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            RentalError::Forbidden(_) => StatusCode::FORBIDDEN,
            RentalError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            RentalError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}
