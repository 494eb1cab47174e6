//! Reconciler implementation.

use std::sync::Arc;
use std::time::Duration;

use caravel_api::Delivery;
use caravel_repository::Repository;

use crate::conditions;
use crate::error::{Error, Result};
use crate::log::{ReconcileLog, TracingLog};

/// Periodic requeue interval requested after a fully successful cycle.
pub const REQUEUE_INTERVAL: Duration = Duration::from_secs(5);

/// Directive for the external engine about the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileResult {
    /// When set, run the next cycle after this long. When unset, no
    /// periodic requeue is requested.
    pub requeue_after: Option<Duration>,
}

impl ReconcileResult {
    /// Request another cycle after the given interval.
    pub fn requeue_after(interval: Duration) -> Self {
        Self {
            requeue_after: Some(interval),
        }
    }

    /// Request no periodic requeue.
    pub fn no_requeue() -> Self {
        Self {
            requeue_after: None,
        }
    }
}

/// One-shot reconciler for delivery pipelines.
///
/// Each call to [`Reconciler::reconcile`] is a full cycle: fetch, validate
/// template references, persist status. Cycles run sequentially on the
/// caller's task; the repository is the only shared mutable state.
pub struct Reconciler {
    repo: Arc<dyn Repository>,
    log: Arc<dyn ReconcileLog>,
}

impl Reconciler {
    /// Create a reconciler that logs through `tracing`.
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self::with_log(repo, Arc::new(TracingLog))
    }

    /// Create a reconciler with an injected event sink.
    pub fn with_log(repo: Arc<dyn Repository>, log: Arc<dyn ReconcileLog>) -> Self {
        Self { repo, log }
    }

    /// Run one reconciliation cycle for the named delivery.
    ///
    /// # Errors
    ///
    /// - [`Error::GetDelivery`] when the primary fetch fails. A delivery
    ///   that no longer exists is not an error; the cycle ends with no
    ///   requeue requested and no status write.
    /// - [`Error::TemplatesNotFound`] when one or more referenced templates
    ///   are unresolved. The failed-readiness status is still persisted
    ///   before this is returned.
    /// - [`Error::StatusUpdate`] when persisting the status fails. Outranks
    ///   a template-resolution failure from the same cycle.
    pub async fn reconcile(&self, name: &str) -> Result<ReconcileResult> {
        self.log.started(name);

        let fetched = self.repo.delivery(name).await.map_err(Error::GetDelivery)?;
        let Some(mut delivery) = fetched else {
            // Deleted out from under us; nothing left to reconcile.
            return Ok(ReconcileResult::no_requeue());
        };

        let unresolved = self.check_templates(&delivery).await;

        let next = conditions::readiness(unresolved.is_empty());
        delivery.status.conditions = conditions::replace(&delivery.status.conditions, next);
        // Stamp the generation just observed, whatever the outcome.
        delivery.status.observed_generation = delivery.generation;

        self.repo
            .status_update(&delivery)
            .await
            .map_err(Error::StatusUpdate)?;

        self.log.finished(name);

        if unresolved.is_empty() {
            Ok(ReconcileResult::requeue_after(REQUEUE_INTERVAL))
        } else {
            Err(Error::TemplatesNotFound {
                resources: unresolved,
            })
        }
    }

    /// Check every referenced template, collecting the spec names of the
    /// failing entries in declaration order. Never short-circuits, so a
    /// single pass reports every broken reference.
    async fn check_templates(&self, delivery: &Delivery) -> Vec<String> {
        let mut unresolved = Vec::new();
        for resource in &delivery.spec.resources {
            if let Err(err) = self
                .repo
                .delivery_cluster_template(&resource.template_ref)
                .await
            {
                self.log.template_fetch_failed(&err.to_string());
                unresolved.push(resource.name.clone());
            }
        }
        unresolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_api::{
        ClusterTemplate, ConditionStatus, ConditionType, DeliveryResource, TemplateKind,
        TemplateRef,
    };
    use caravel_repository::InMemoryRepository;

    async fn seeded_repo() -> Arc<InMemoryRepository> {
        let repo = Arc::new(InMemoryRepository::new());
        repo.insert_template(ClusterTemplate::new(
            TemplateKind::ClusterSourceTemplate,
            "git-source",
        ))
        .await;
        repo.insert_delivery(
            Delivery::new("my-delivery")
                .with_generation(42)
                .with_resource(DeliveryResource::new(
                    "source",
                    TemplateRef::new(TemplateKind::ClusterSourceTemplate, "git-source"),
                )),
        )
        .await;
        repo
    }

    #[tokio::test]
    async fn test_successful_cycle_persists_ready_status() {
        let repo = seeded_repo().await;
        let reconciler = Reconciler::new(repo.clone());

        let result = reconciler.reconcile("my-delivery").await.ok();
        assert_eq!(
            result.map(|r| r.requeue_after),
            Some(Some(REQUEUE_INTERVAL))
        );

        let stored = repo.delivery("my-delivery").await.ok().flatten();
        let status = stored.map(|d| d.status);
        assert_eq!(
            status.as_ref().map(|s| s.observed_generation),
            Some(42)
        );
        assert_eq!(
            status
                .as_ref()
                .and_then(|s| s.condition(ConditionType::Ready))
                .map(|c| c.status),
            Some(ConditionStatus::True)
        );
    }

    #[tokio::test]
    async fn test_rerun_with_unchanged_spec_is_idempotent() {
        let repo = seeded_repo().await;
        let reconciler = Reconciler::new(repo.clone());

        let first = reconciler.reconcile("my-delivery").await.ok();
        let after_first = repo.delivery("my-delivery").await.ok().flatten();

        let second = reconciler.reconcile("my-delivery").await.ok();
        let after_second = repo.delivery("my-delivery").await.ok().flatten();

        assert_eq!(first, second);
        // Transition times included: nothing changed, nothing moves.
        assert_eq!(
            after_first.map(|d| d.status),
            after_second.map(|d| d.status)
        );
    }

    #[tokio::test]
    async fn test_deleted_delivery_stops_requeueing() {
        let repo = seeded_repo().await;
        let reconciler = Reconciler::new(repo.clone());

        let before = reconciler.reconcile("my-delivery").await.ok();
        assert_eq!(
            before.map(|r| r.requeue_after),
            Some(Some(REQUEUE_INTERVAL))
        );

        // Delete the delivery between cycles, as an external owner would.
        let removed = repo.remove_delivery("my-delivery").await;
        assert_eq!(removed.map(|d| d.name), Some("my-delivery".to_string()));
        assert_eq!(repo.delivery_count().await, 0);

        let after = reconciler.reconcile("my-delivery").await.ok();
        assert_eq!(after, Some(ReconcileResult::no_requeue()));
    }

    #[tokio::test]
    async fn test_vanished_delivery_ends_cycle_quietly() {
        let repo = Arc::new(InMemoryRepository::new());
        let reconciler = Reconciler::new(repo);

        let result = reconciler.reconcile("never-existed").await.ok();
        assert_eq!(result, Some(ReconcileResult::no_requeue()));
    }

    #[tokio::test]
    async fn test_unresolved_template_persists_failure_and_errors() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.insert_delivery(
            Delivery::new("my-delivery")
                .with_generation(7)
                .with_resource(DeliveryResource::new(
                    "deploy",
                    TemplateRef::new(TemplateKind::ClusterTemplate, "missing"),
                )),
        )
        .await;
        let reconciler = Reconciler::new(repo.clone());

        let err = reconciler.reconcile("my-delivery").await.err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("encountered errors fetching resources: deploy".to_string())
        );

        // The failed-readiness status still landed, generation stamped.
        let stored = repo.delivery("my-delivery").await.ok().flatten();
        let status = stored.map(|d| d.status);
        assert_eq!(status.as_ref().map(|s| s.observed_generation), Some(7));
        assert_eq!(
            status
                .as_ref()
                .and_then(|s| s.condition(ConditionType::TemplatesReady))
                .map(|c| (c.status, c.reason.clone())),
            Some((ConditionStatus::False, "TemplatesNotFound".to_string()))
        );
    }
}
