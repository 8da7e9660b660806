//! Application Error
//!
//! [`AppError`] is what every domain error becomes at the HTTP boundary.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified application error
///
/// * `kind` - classification, maps to the HTTP status code
/// * `message` - client-facing message
/// * `action` - optional hint on what the client can do about it
/// * `source` - underlying error, for logs only
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::bad_request("title must be at most 200 characters")
///     .with_action("Shorten the title");
/// assert_eq!(err.kind(), ErrorKind::BadRequest);
/// assert_eq!(err.action(), Some("Shorten the title"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// Validation failures
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn service_unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attach the underlying error (logged, never rendered)
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Same kind, message and action, without the source
    pub fn to_public(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            action: self.action.clone(),
            source: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    /// Server errors collapse to the reason phrase so storage details
    /// never reach a client.
    pub fn public_message(&self) -> &str {
        if self.is_server_error() {
            self.kind.as_str()
        } else {
            &self.message
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
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
    fn test_constructors() {
        assert_eq!(AppError::bad_request("x").status_code(), 400);
        assert_eq!(AppError::internal("x").status_code(), 500);
        assert_eq!(AppError::service_unavailable("x").status_code(), 503);
        assert_eq!(AppError::new(ErrorKind::Conflict, "x").status_code(), 409);
    }

    #[test]
    fn test_public_message_hides_server_errors() {
        let err = AppError::internal("relation \"blog_posts\" does not exist");
        assert_eq!(err.public_message(), "Internal Server Error");

        let err = AppError::new(ErrorKind::Forbidden, "You can only delete your own comments.");
        assert_eq!(err.public_message(), "You can only delete your own comments.");
    }

    #[test]
    fn test_to_public_keeps_action_drops_source() {
        let io_err = std::io::Error::other("disk on fire");
        let err = AppError::bad_request("password must be at least 8 characters")
            .with_action("Choose a longer password")
            .with_source(io_err);
        assert!(err.source().is_some());

        let public = err.to_public();
        assert_eq!(public.message(), err.message());
        assert_eq!(public.action(), Some("Choose a longer password"));
        assert!(public.source().is_none());
    }

    #[test]
    fn test_display() {
        let err = AppError::new(ErrorKind::NotFound, "User not found.");
        assert_eq!(err.to_string(), "[Not Found] User not found.");
    }
}
