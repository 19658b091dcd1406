//! Repository abstraction layer for the tasklist service
//!
//! This crate provides the storage side of the service:
//!
//! - **Query building**: closed `SortField`/`SortOrder` enumerations mapped to
//!   fixed `ORDER BY` fragments, and a `ListFilter` bound into one fixed
//!   `WHERE` clause, so request input never reaches SQL text
//! - **PostgreSQL repository**: one atomic statement per operation
//! - **In-memory repository**: same semantics behind a `RwLock`, used as the
//!   fake store in tests
//!
//! # Quick Start
//!
//! ```no_run
//! use tasklist_core::{ItemPayload, ItemStatus};
//! use tasklist_repository::{InMemoryItemRepository, ItemRepository, ListFilter, ListOrder, ListQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = InMemoryItemRepository::new();
//!
//!     let item = repo.create(ItemPayload::new("buy milk", "2%")).await?;
//!     let fetched = repo.get_by_id(item.id).await?;
//!     assert_eq!(fetched.title, "buy milk");
//!
//!     let order = ListOrder::from_params(Some("due_date"), Some("DESC"));
//!     let all = repo.list(order.into()).await?;
//!     println!("{} items", all.len());
//!
//!     let filter = ListFilter::default().with_status(ItemStatus::ToDo);
//!     let open = repo.list(ListQuery::new(filter, order)).await?;
//!     println!("{} open", open.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │        Request handlers (server)       │
//! └──────────────┬─────────────────────────┘
//!                │ ItemRepository trait
//!       ┌────────┴────────┐
//!       ↓                 ↓
//! ┌──────────────┐  ┌──────────────────┐
//! │  In-memory   │  │  PostgreSQL      │
//! │  Repository  │  │  Repository      │
//! └──────────────┘  └──────────────────┘
//! ```

pub mod error;
pub mod memory;
pub mod query;
pub mod traits;

#[cfg(feature = "postgres")]
pub mod postgres;

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Query building
pub use query::{ListFilter, ListOrder, ListQuery, SortField, SortOrder};

// Re-exports - Repositories
pub use memory::InMemoryItemRepository;
pub use traits::ItemRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresItemRepository;
