//! In-memory repository for testing and demos.

use std::collections::HashMap;

use async_trait::async_trait;
use caravel_api::{ClusterTemplate, Delivery, TemplateKind, TemplateRef};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::repository::Repository;

/// In-memory storage backend.
///
/// Deliveries are keyed by name, templates by (kind, name). Seed state with
/// [`InMemoryRepository::insert_delivery`] and
/// [`InMemoryRepository::insert_template`].
#[derive(Default)]
pub struct InMemoryRepository {
    deliveries: RwLock<HashMap<String, Delivery>>,
    templates: RwLock<HashMap<(TemplateKind, String), ClusterTemplate>>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a delivery.
    pub async fn insert_delivery(&self, delivery: Delivery) {
        self.deliveries
            .write()
            .await
            .insert(delivery.name.clone(), delivery);
    }

    /// Insert or replace a template.
    pub async fn insert_template(&self, template: ClusterTemplate) {
        self.templates
            .write()
            .await
            .insert((template.kind, template.name.clone()), template);
    }

    /// Remove a delivery, returning it if present.
    pub async fn remove_delivery(&self, name: &str) -> Option<Delivery> {
        self.deliveries.write().await.remove(name)
    }

    /// Number of stored deliveries.
    pub async fn delivery_count(&self) -> usize {
        self.deliveries.read().await.len()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn delivery(&self, name: &str) -> Result<Option<Delivery>> {
        Ok(self.deliveries.read().await.get(name).cloned())
    }

    async fn delivery_cluster_template(
        &self,
        reference: &TemplateRef,
    ) -> Result<ClusterTemplate> {
        self.templates
            .read()
            .await
            .get(&(reference.kind, reference.name.clone()))
            .cloned()
            .ok_or_else(|| Error::template_not_found(reference.kind, reference.name.clone()))
    }

    async fn status_update(&self, delivery: &Delivery) -> Result<()> {
        let mut deliveries = self.deliveries.write().await;
        match deliveries.get_mut(&delivery.name) {
            Some(stored) => {
                debug!(name = %delivery.name, "persisting status");
                *stored = delivery.clone();
                Ok(())
            }
            None => Err(Error::unknown_delivery(delivery.name.clone())),
        }
    }
}
