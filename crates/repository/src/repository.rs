//! The repository capability trait.

use async_trait::async_trait;
use caravel_api::{ClusterTemplate, Delivery, TemplateRef};

use crate::error::Result;

/// Trait for storage backends consumed by reconciliation.
///
/// Ordering and consistency of concurrent writes are the backend's
/// responsibility; callers hold no locks across these calls.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Fetch a delivery by name.
    ///
    /// `Ok(None)` means the delivery does not exist, which is a normal
    /// outcome (the object was deleted), not an error.
    async fn delivery(&self, name: &str) -> Result<Option<Delivery>>;

    /// Resolve a template reference.
    ///
    /// An error means the reference is unresolved. Reconciliation only
    /// checks existence; the returned value is for downstream consumers.
    async fn delivery_cluster_template(&self, reference: &TemplateRef)
        -> Result<ClusterTemplate>;

    /// Persist the full object, status included.
    async fn status_update(&self, delivery: &Delivery) -> Result<()>;
}
