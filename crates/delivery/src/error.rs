//! Error types for the delivery reconciler.
//!
//! Three caller-recoverable kinds, each with a distinguishing message prefix
//! so downstream assertions can match on substring. None are fatal to the
//! process; the external engine owns retry and backoff policy.

use thiserror::Error;

/// Result type alias for reconciler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Delivery reconciliation error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching the delivery itself failed. "Not found" is not this error;
    /// a vanished delivery ends the cycle normally.
    #[error("get delivery: {0}")]
    GetDelivery(#[source] caravel_repository::Error),

    /// One or more referenced templates could not be fetched. Carries the
    /// spec names of every failing resource, in declaration order.
    #[error("encountered errors fetching resources: {}", .resources.join(", "))]
    TemplatesNotFound { resources: Vec<String> },

    /// Persisting the computed status failed. Takes precedence over a
    /// template-resolution failure in the same cycle, since the computed
    /// status was never durably recorded.
    #[error("status update: {0}")]
    StatusUpdate(#[source] caravel_repository::Error),
}
