//! Tasklist Core - entity types and validation for the tasklist service
//!
//! This crate provides the types shared by the storage and HTTP layers:
//! - `Item`, the task record, and its status tag
//! - Inbound payloads for create, replace and merge
//! - The `Validator` guarding those payloads, plus parsers for path
//!   identifiers and query timestamps

pub mod error;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use error::ValidationError;
pub use model::{Item, ItemPatch, ItemPayload, ItemStatus};
pub use validation::{parse_item_id, parse_timestamp, Validator};
