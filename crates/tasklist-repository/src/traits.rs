//! Core trait definition for item storage
//!
//! [`ItemRepository`] is the seam between the HTTP handlers and the store.
//! Handlers receive it as `Arc<dyn ItemRepository>`, so tests can substitute
//! [`InMemoryItemRepository`](crate::InMemoryItemRepository) for PostgreSQL.
//!
//! # Existence semantics
//!
//! `replace`, `patch` and `delete` never probe for the row first. Each is a
//! single write whose own result (row returned / rows affected) decides
//! between success and [`RepositoryError::NotFound`](crate::RepositoryError).

use async_trait::async_trait;
use tasklist_core::{Item, ItemPatch, ItemPayload};
use uuid::Uuid;

use crate::{ListQuery, RepositoryResult};

/// CRUD operations over the item table
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch one item, or `NotFound`
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Item>;

    /// Fetch every item matching the query's filter, in its order
    ///
    /// An empty result yields an empty vector, never an error.
    async fn list(&self, query: ListQuery) -> RepositoryResult<Vec<Item>>;

    /// Insert a new item; the store assigns `id`, `created_at` and `updated_at`
    async fn create(&self, payload: ItemPayload) -> RepositoryResult<Item>;

    /// Overwrite title, description, status and due date, refreshing
    /// `updated_at`
    async fn replace(&self, id: Uuid, payload: ItemPayload) -> RepositoryResult<Item>;

    /// Overwrite only the fields present in `patch`, refreshing `updated_at`
    async fn patch(&self, id: Uuid, patch: ItemPatch) -> RepositoryResult<Item>;

    /// Remove the item
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
