//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::application::token_codec::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user with the supplied login
    #[error("Invalid login")]
    LoginNotFound,

    /// User exists but the password does not match
    #[error("Invalid password")]
    InvalidPassword,

    #[error("User with username '{0}' already exists")]
    UserAlreadyExists(String),

    /// Default role is not seeded (operator misconfiguration)
    #[error("Role {0} not found")]
    RoleMissing(String),

    /// Network error, timeout or non-2xx answer from the provider
    #[error("Federation provider unavailable: {0}")]
    FederationUnavailable(String),

    #[error("Federation provider returned no access token")]
    FederationTokenMissing,

    /// Provider identity lacks a required field
    #[error("Federated identity is missing '{0}'")]
    FederationIdentityIncomplete(&'static str),

    #[error("Token is malformed")]
    TokenMalformed,

    #[error("Token signature is invalid")]
    TokenSignatureInvalid,

    #[error("Token has expired")]
    TokenExpired,

    /// Backing store failure
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AuthError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::LoginNotFound => "USER_NOT_FOUND",
            AuthError::InvalidPassword => "INVALID_PASSWORD",
            AuthError::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            AuthError::RoleMissing(_) => "ROLE_MISSING",
            AuthError::FederationUnavailable(_) => "FEDERATION_UNAVAILABLE",
            AuthError::FederationTokenMissing => "FEDERATION_TOKEN_MISSING",
            AuthError::FederationIdentityIncomplete(_) => "FEDERATION_IDENTITY_INCOMPLETE",
            AuthError::TokenMalformed => "TOKEN_MALFORMED",
            AuthError::TokenSignatureInvalid => "TOKEN_SIGNATURE_INVALID",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::PersistenceFailure(_) => "PERSISTENCE_FAILURE",
            AuthError::Unexpected(_) => "UNEXPECTED",
        }
    }

    /// Get the ErrorKind for this error
    ///
    /// Unknown login and wrong password share 404 so the status alone does
    /// not reveal which one happened; the `code` still tells them apart.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::LoginNotFound | AuthError::InvalidPassword => ErrorKind::NotFound,
            AuthError::UserAlreadyExists(_) => ErrorKind::Conflict,
            AuthError::TokenMalformed
            | AuthError::TokenSignatureInvalid
            | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::FederationUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::FederationTokenMissing | AuthError::FederationIdentityIncomplete(_) => {
                ErrorKind::BadGateway
            }
            AuthError::RoleMissing(_)
            | AuthError::PersistenceFailure(_)
            | AuthError::Unexpected(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    ///
    /// Server-side faults render a generic detail; the full message is logged.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        let detail = if kind.is_server_error() && !self.is_federation() {
            kind.as_str().to_string()
        } else {
            self.to_string()
        };
        AppError::new(kind, detail).with_code(self.code())
    }

    fn is_federation(&self) -> bool {
        matches!(
            self,
            AuthError::FederationUnavailable(_)
                | AuthError::FederationTokenMissing
                | AuthError::FederationIdentityIncomplete(_)
        )
    }

    /// Log the error with appropriate level
    ///
    /// Credential and token rejections are already logged (warn) where they
    /// are classified, so only server-side faults are logged loudly here.
    fn log(&self) {
        match self {
            AuthError::RoleMissing(role) => {
                tracing::error!(role = %role, "Default role is not configured");
            }
            AuthError::PersistenceFailure(msg) => {
                tracing::error!(message = %msg, "Auth store failure");
            }
            AuthError::Unexpected(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::FederationUnavailable(_)
            | AuthError::FederationTokenMissing
            | AuthError::FederationIdentityIncomplete(_) => {
                tracing::error!(error = %self, code = self.code(), "Federated login failed");
            }
            _ => {
                tracing::debug!(error = %self, code = self.code(), "Auth error");
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
            TokenError::Malformed => AuthError::TokenMalformed,
            TokenError::SignatureInvalid => AuthError::TokenSignatureInvalid,
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Encoding(msg) => AuthError::Unexpected(msg),
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::PersistenceFailure(err.to_string())
    }
}
