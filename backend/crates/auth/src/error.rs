//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failure. Covers both unknown email and wrong password;
    /// the response must not distinguish the two.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, expired, malformed, or signature-mismatched token
    #[error("Invalid token")]
    InvalidToken,

    /// Registration conflict
    #[error("Email is already in use")]
    EmailInUse,

    /// A token's subject no longer resolves to a user
    #[error("User not found")]
    UserNotFound,

    /// Request field validation failed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::UserNotFound => StatusCode::UNAUTHORIZED,
            AuthError::EmailInUse | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::EmailInUse | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Request with invalid token");
            }
            AuthError::UserNotFound => {
                tracing::warn!("Token subject does not resolve to a user");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid => AuthError::InvalidToken,
            TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
