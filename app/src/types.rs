//! Values exchanged between the router and the boundary views.

use core::fmt;
use std::sync::Arc;

use http::status::StatusCode;
use thiserror::Error;

/// An error that escaped a rendering subtree.
///
/// The `digest` is an optional diagnostic identifier used to correlate what the
/// user saw with what was logged. Neither field is validated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RenderError {
    pub message: String,
    pub digest: Option<String>,
}

impl RenderError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            digest: None,
        }
    }

    #[must_use]
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }
}

/// Shared handle to a [`RenderError`].
///
/// Equality is identity: two reports are equal only when they point at the
/// same error, even if the messages match.
#[derive(Clone, Debug)]
pub struct ErrorReport(Arc<RenderError>);

impl ErrorReport {
    #[must_use]
    pub fn new(error: RenderError) -> Self {
        Self(Arc::new(error))
    }

    #[must_use]
    pub fn error(&self) -> &RenderError {
        &self.0
    }
}

impl PartialEq for ErrorReport {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ErrorReport {}

impl From<RenderError> for ErrorReport {
    fn from(error: RenderError) -> Self {
        Self::new(error)
    }
}

/// Zero-argument callback the host hands out to retry a failed subtree.
#[derive(Clone)]
pub struct Reset(Arc<dyn Fn() + Send + Sync>);

impl Reset {
    pub fn new(reset: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(reset))
    }

    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| ())
    }

    /// Asks the host to re-render. The outcome is not observable from here.
    pub fn trigger(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Reset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reset").finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    #[error("Render failed")]
    Render,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Render => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
