//! Router creation and configuration
//!
//! The route table is the whole dispatch: each (method, path) pair maps to
//! exactly one typed handler.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tasklist_repository::ItemRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(repository: Arc<dyn ItemRepository>) -> Router {
    let state = AppState { repository };

    Router::new()
        .route("/health", get(health))
        .route("/list", collection_routes())
        .route("/list/", collection_routes())
        .route(
            "/list/:id",
            get(get_item)
                .post(collection_only)
                .put(replace_item)
                .patch(patch_item)
                .delete(delete_item),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn collection_routes() -> MethodRouter<AppState> {
    get(list_items)
        .post(create_item)
        .put(id_required)
        .patch(id_required)
        .delete(id_required)
}
