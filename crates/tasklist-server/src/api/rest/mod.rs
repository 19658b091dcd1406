//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Application state and request parameter types
//! - extractors: Custom request extractors
//! - handlers: One typed handler per (method, path) route
//! - router: The route table
//! - tests: Unit tests for all components

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{JsonExtractor, PathExtractor};
pub use router::create_router;
pub use types::{AppState, HealthResponse, ListParams};
