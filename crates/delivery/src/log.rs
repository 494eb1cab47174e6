//! Structured progress events for reconciliation.
//!
//! The reconciler emits through an explicit sink rather than ambient global
//! state, so tests can capture events without installing a subscriber.

use tracing::{error, info};

/// Sink for the events a reconciliation cycle emits.
pub trait ReconcileLog: Send + Sync {
    /// A cycle has begun for the named delivery.
    fn started(&self, name: &str);

    /// A cycle has completed for the named delivery.
    fn finished(&self, name: &str);

    /// A template fetch failed; called once per failing reference, before
    /// failures are aggregated.
    fn template_fetch_failed(&self, error: &str);
}

/// Production sink that forwards to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ReconcileLog for TracingLog {
    fn started(&self, name: &str) {
        info!(name = %name, "started");
    }

    fn finished(&self, name: &str) {
        info!(name = %name, "finished");
    }

    fn template_fetch_failed(&self, error: &str) {
        error!(error = %error, "retrieving cluster template");
    }
}
