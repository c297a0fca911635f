/**
 * Application Error Types
 *
 * This module defines the error taxonomy used across all HTTP handlers.
 * Each variant maps to an HTTP status code and a message that is safe to
 * show to the client.
 *
 * # Error Categories
 *
 * - `Validation` - rejected input, surfaced with a descriptive message
 *   before any persistence or token operation runs
 * - `InvalidCredentials` - unknown email or wrong password; deliberately
 *   generic so the response never reveals whether the email exists
 * - `Unauthorized` - a mutating action was attempted without a valid
 *   session
 * - `DuplicateEmail` - registration with an email already in use,
 *   surfaced distinctly so the user can correct it
 * - `NotFound` - a referenced record does not exist
 * - `Database` / `Hash` / `Token` - internal failures; logged, and
 *   normalized to a generic 500 body
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Application error taxonomy
///
/// Handlers return `Result<_, AppError>`; the `IntoResponse` impl in
/// `error::conversion` turns each variant into a JSON error response.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation failure (missing field, password mismatch, bad
    /// event type, unparsable date)
    #[error("{0}")]
    Validation(String),

    /// Unknown email or wrong password. One variant for both cases so the
    /// client cannot distinguish them.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A mutating action was attempted without a valid session
    #[error("You must be logged in to perform this action")]
    Unauthorized,

    /// Registration with an email that already has an account
    #[error("An account with this email already exists")]
    DuplicateEmail,

    /// A referenced record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database failure. Details are logged, never returned to the client.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hashing error")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token issuance failure. Verification failures never surface here;
    /// they are normalized to "no session" by the token service.
    #[error("token error")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to return to the client
    ///
    /// Internal variants collapse to a generic message; their details are
    /// only ever written to the log.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hash(_) | Self::Token(_))
    }

    /// Log the error at a level appropriate for its category
    pub fn log(&self) {
        if self.is_internal() {
            tracing::error!("Internal error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            AppError::Validation("Required fields are missing".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound("Event").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_do_not_leak() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_credentials_message_is_generic() {
        // Same message whether the email is unknown or the password is wrong
        assert_eq!(
            AppError::InvalidCredentials.public_message(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::Validation("Passwords do not match".into());
        assert_eq!(err.public_message(), "Passwords do not match");
    }
}
