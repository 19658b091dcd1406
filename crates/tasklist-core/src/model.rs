//! Item data model
//!
//! `Item` is the only entity of the service. The wire shape is
//! `{id, title, desc, status, due_date, created_at, updated_at}` with a
//! nullable `due_date`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

/// Progress tag of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "to-do")]
    ToDo,
    #[serde(rename = "doing")]
    Doing,
    #[serde(rename = "completed")]
    Completed,
}

impl ItemStatus {
    /// Tag as stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::ToDo => "to-do",
            ItemStatus::Doing => "doing",
            ItemStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-do" => Ok(ItemStatus::ToDo),
            "doing" => Ok(ItemStatus::Doing),
            "completed" => Ok(ItemStatus::Completed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// A stored task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by the store on creation, immutable afterwards
    pub id: Uuid,

    pub title: String,

    #[serde(rename = "desc")]
    pub description: String,

    pub status: ItemStatus,

    pub due_date: Option<DateTime<Utc>>,

    /// Set once at insertion
    pub created_at: DateTime<Utc>,

    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a freshly inserted item from a creation payload
    pub fn from_payload(id: Uuid, payload: ItemPayload, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            description: payload.description,
            status: payload.status,
            due_date: payload.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field with the payload
    pub fn replace_with(&mut self, payload: ItemPayload, now: DateTime<Utc>) {
        self.title = payload.title;
        self.description = payload.description;
        self.status = payload.status;
        self.due_date = payload.due_date;
        self.touch(now);
    }

    /// Overwrite only the fields present in the patch
    pub fn merge(&mut self, patch: ItemPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        self.touch(now);
    }

    // updated_at never goes behind created_at
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

/// Request body for POST and PUT
///
/// Absent text fields decode as empty strings and an absent status as
/// `to-do`, so a PUT replaces every field whether or not the client sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub title: String,

    #[serde(rename = "desc", default)]
    pub description: String,

    #[serde(default)]
    pub status: ItemStatus,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl ItemPayload {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request body for PATCH
///
/// `due_date` is doubly optional: `None` leaves it untouched, `Some(None)`
/// (an explicit JSON `null`) clears it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(rename = "desc", default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<ItemStatus>,

    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
