//! Application Error - Unified error type for the transport boundary
//!
//! Defines [`AppError`] and [`AppResult<T>`].

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified application error
///
/// Carries everything the boundary needs to render a response:
/// * `kind` - transport classification (status code)
/// * `code` - stable machine-readable code clients can branch on
/// * `message` - human-readable message
/// * `source` - underlying error, never rendered
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::unauthorized("Token has expired").with_code("TOKEN_EXPIRED");
/// assert_eq!(err.status_code(), 401);
/// assert_eq!(err.code(), "TOKEN_EXPIRED");
/// ```
pub struct AppError {
    kind: ErrorKind,
    code: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            source: None,
        }
    }

    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Attach a stable machine-readable code
    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the underlying error (debugging only, never rendered)
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Machine-readable code. Falls back to the kind's SCREAMING_SNAKE name.
    pub fn code(&self) -> &str {
        match &self.code {
            Some(code) => code,
            None => match self.kind {
                ErrorKind::BadRequest => "BAD_REQUEST",
                ErrorKind::Unauthorized => "UNAUTHORIZED",
                ErrorKind::Forbidden => "FORBIDDEN",
                ErrorKind::NotFound => "NOT_FOUND",
                ErrorKind::Conflict => "CONFLICT",
                ErrorKind::InternalServerError => "INTERNAL_SERVER_ERROR",
                ErrorKind::BadGateway => "BAD_GATEWAY",
                ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            },
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code());
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.code(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "Invalid login");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Invalid login");
    }

    #[test]
    fn test_code_defaults_to_kind() {
        assert_eq!(AppError::new(ErrorKind::Conflict, "x").code(), "CONFLICT");
        assert_eq!(AppError::new(ErrorKind::BadGateway, "x").code(), "BAD_GATEWAY");
        assert_eq!(AppError::bad_request("x").code(), "BAD_REQUEST");
    }

    #[test]
    fn test_with_code_overrides() {
        let err =
            AppError::new(ErrorKind::NotFound, "Invalid password").with_code("INVALID_PASSWORD");
        assert_eq!(err.code(), "INVALID_PASSWORD");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = AppError::new(ErrorKind::ServiceUnavailable, "Provider unreachable")
            .with_source(io_err);
        assert!(err.source().is_some());
        assert!(err.is_server_error());
    }

    #[test]
    fn test_display() {
        let err = AppError::unauthorized("Token has expired").with_code("TOKEN_EXPIRED");
        assert_eq!(err.to_string(), "[Unauthorized] TOKEN_EXPIRED: Token has expired");
    }
}
