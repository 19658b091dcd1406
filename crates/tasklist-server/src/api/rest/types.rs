//! Request and response type definitions
//!
//! Item bodies themselves are the `tasklist_core` types; this module only
//! holds what is specific to the HTTP surface.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tasklist_core::{parse_timestamp, ItemStatus, ValidationError};
use tasklist_repository::{ItemRepository, ListFilter, ListOrder, ListQuery};

/// Application state
///
/// The repository is injected at router construction; handlers never reach
/// for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ItemRepository>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters accepted by `GET /list`
///
/// Extracted from the raw query pairs rather than through serde, so a
/// repeated key keeps its first value instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// `status`, `due_date` or `created_at`; anything else sorts by `created_at`
    pub sort: Option<String>,

    /// `ASC` or `DESC`; anything else sorts ascending
    pub order: Option<String>,

    /// Only items with this status tag
    pub status: Option<String>,

    /// Only items due strictly before this RFC 3339 instant
    pub due_before: Option<String>,

    /// Only items due strictly after this RFC 3339 instant
    pub due_after: Option<String>,
}

impl ListParams {
    /// Collect known keys from decoded query pairs; first occurrence wins,
    /// unknown keys are ignored
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sort" => &mut params.sort,
                "order" => &mut params.order,
                "status" => &mut params.status,
                "due_before" => &mut params.due_before,
                "due_after" => &mut params.due_after,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn list_order(&self) -> ListOrder {
        ListOrder::from_params(self.sort.as_deref(), self.order.as_deref())
    }

    /// Filter part of the request; empty values count as absent
    pub fn list_filter(&self) -> Result<ListFilter, ValidationError> {
        let mut filter = ListFilter::default();
        if let Some(raw) = non_empty(&self.status) {
            filter = filter.with_status(raw.parse::<ItemStatus>()?);
        }
        if let Some(raw) = non_empty(&self.due_before) {
            filter = filter.due_before(parse_timestamp(raw)?);
        }
        if let Some(raw) = non_empty(&self.due_after) {
            filter = filter.due_after(parse_timestamp(raw)?);
        }
        Ok(filter)
    }

    pub fn list_query(&self) -> Result<ListQuery, ValidationError> {
        Ok(ListQuery::new(self.list_filter()?, self.list_order()))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.is_empty())
}
