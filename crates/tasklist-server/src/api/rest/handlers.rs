//! API endpoint handlers
//!
//! One handler per (method, path) pair in the route table. Mutating handlers
//! validate before touching the repository; repository outcomes map onto
//! status codes through `From<RepositoryError> for ServerError`.

use super::extractors::{JsonExtractor, PathExtractor};
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tasklist_core::{parse_item_id, Item, ItemPatch, ItemPayload, ValidationError, Validator};
use tracing::{debug, info};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /list`
pub(super) async fn list_items(
    State(state): State<AppState>,
    params: ListParams,
) -> Result<Json<Vec<Item>>, ServerError> {
    let query = params.list_query()?;
    debug!(
        "Listing items: {:?} {}",
        query.filter,
        query.order.order_by_clause()
    );

    let items = state.repository.list(query).await?;
    Ok(Json(items))
}

/// `GET /list/{id}`
pub(super) async fn get_item(
    State(state): State<AppState>,
    PathExtractor(raw_id): PathExtractor<String>,
) -> Result<Json<Item>, ServerError> {
    let id = parse_item_id(&raw_id)?;
    debug!("Fetching item {}", id);

    let item = state.repository.get_by_id(id).await?;
    Ok(Json(item))
}

/// `POST /list`
#[axum::debug_handler]
pub(super) async fn create_item(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<ItemPayload>,
) -> Result<(StatusCode, Json<Item>), ServerError> {
    Validator::new().validate_new_item(&payload)?;

    let item = state.repository.create(payload).await?;
    info!("Created item {}", item.id);

    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /list/{id}`: full replacement
#[axum::debug_handler]
pub(super) async fn replace_item(
    State(state): State<AppState>,
    PathExtractor(raw_id): PathExtractor<String>,
    JsonExtractor(payload): JsonExtractor<ItemPayload>,
) -> Result<Json<Item>, ServerError> {
    let id = parse_item_id(&raw_id)?;
    Validator::new().validate_replacement(&payload)?;

    let item = state.repository.replace(id, payload).await?;
    info!("Replaced item {}", id);

    Ok(Json(item))
}

/// `PATCH /list/{id}`: field-level merge
#[axum::debug_handler]
pub(super) async fn patch_item(
    State(state): State<AppState>,
    PathExtractor(raw_id): PathExtractor<String>,
    JsonExtractor(patch): JsonExtractor<ItemPatch>,
) -> Result<Json<Item>, ServerError> {
    let id = parse_item_id(&raw_id)?;
    Validator::new().validate_patch(&patch)?;

    let item = state.repository.patch(id, patch).await?;
    info!("Patched item {}", id);

    Ok(Json(item))
}

/// `DELETE /list/{id}`: 200 with an empty body
pub(super) async fn delete_item(
    State(state): State<AppState>,
    PathExtractor(raw_id): PathExtractor<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_item_id(&raw_id)?;
    info!("Deleting item {}", id);

    state.repository.delete(id).await?;
    Ok(StatusCode::OK)
}

/// PUT, PATCH or DELETE on the collection path
pub(super) async fn id_required() -> ServerError {
    ValidationError::MissingId.into()
}

/// POST on a single-resource path
pub(super) async fn collection_only() -> ServerError {
    ServerError::NotFound("Invalid path".to_string())
}
