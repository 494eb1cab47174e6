//! Error types for the repository crate.

use caravel_api::TemplateKind;
use thiserror::Error;

/// Result type alias for repository operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Repository error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Opaque failure reported by the storage backend. Displays as the raw
    /// cause so callers can wrap it with their own context.
    #[error("{0}")]
    Backend(String),

    /// A referenced template does not exist.
    #[error("template {kind}/{name} not found")]
    TemplateNotFound { kind: TemplateKind, name: String },

    /// A status update targeted a delivery that does not exist.
    #[error("delivery '{name}' does not exist")]
    UnknownDelivery { name: String },
}

impl Error {
    /// Create a backend error.
    pub fn backend(cause: impl Into<String>) -> Self {
        Self::Backend(cause.into())
    }

    /// Create a template-not-found error.
    pub fn template_not_found(kind: TemplateKind, name: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            kind,
            name: name.into(),
        }
    }

    /// Create an unknown-delivery error.
    pub fn unknown_delivery(name: impl Into<String>) -> Self {
        Self::UnknownDelivery { name: name.into() }
    }
}
