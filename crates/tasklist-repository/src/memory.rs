//! In-memory item repository
//!
//! Mirrors the PostgreSQL backend's semantics, including list filtering and
//! ordering. Each write holds the map's write lock for its whole duration,
//! which plays the role of the single atomic statement on the database side.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tasklist_core::{Item, ItemPatch, ItemPayload};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{error::RepositoryError, traits::ItemRepository, ListQuery, RepositoryResult};

/// Item repository backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<Uuid, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with items
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            items: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Item> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    async fn list(&self, query: ListQuery) -> RepositoryResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .read()
            .await
            .values()
            .filter(|item| query.filter.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| query.order.compare(a, b));
        Ok(items)
    }

    async fn create(&self, payload: ItemPayload) -> RepositoryResult<Item> {
        let item = Item::from_payload(Uuid::new_v4(), payload, Utc::now());
        self.items.write().await.insert(item.id, item.clone());
        tracing::debug!("Inserted item {}", item.id);
        Ok(item)
    }

    async fn replace(&self, id: Uuid, payload: ItemPayload) -> RepositoryResult<Item> {
        let mut items = self.items.write().await;
        let item = items.get_mut(&id).ok_or(RepositoryError::NotFound { id })?;
        item.replace_with(payload, Utc::now());
        Ok(item.clone())
    }

    async fn patch(&self, id: Uuid, patch: ItemPatch) -> RepositoryResult<Item> {
        let mut items = self.items.write().await;
        let item = items.get_mut(&id).ok_or(RepositoryError::NotFound { id })?;
        item.merge(patch, Utc::now());
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        match self.items.write().await.remove(&id) {
            Some(_) => {
                tracing::debug!("Deleted item {}", id);
                Ok(())
            }
            None => Err(RepositoryError::NotFound { id }),
        }
    }
}
