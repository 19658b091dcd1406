//! Payload and identifier validation
//!
//! The validator is a pure function of its inputs plus a reference time.
//! `Validator::new()` pins that time to the moment of construction;
//! `Validator::at()` lets callers (and tests) supply it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::model::{ItemPatch, ItemPayload};

/// Validator for inbound item payloads
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    now: DateTime<Utc>,
}

impl Validator {
    /// Create a validator evaluated against the current time
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a validator evaluated against a fixed time
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Creation rules: non-empty title and description, future due date
    pub fn validate_new_item(&self, payload: &ItemPayload) -> Result<()> {
        if payload.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if payload.description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        self.check_due_date(payload.due_date)
    }

    /// Replacement rules: due date only, required fields are not checked
    pub fn validate_replacement(&self, payload: &ItemPayload) -> Result<()> {
        self.check_due_date(payload.due_date)
    }

    /// Merge rules: present text fields must be non-empty, a non-null due
    /// date must lie in the future
    pub fn validate_patch(&self, patch: &ItemPatch) -> Result<()> {
        if matches!(patch.title.as_deref(), Some("")) {
            return Err(ValidationError::EmptyTitle);
        }
        if matches!(patch.description.as_deref(), Some("")) {
            return Err(ValidationError::EmptyDescription);
        }
        self.check_due_date(patch.due_date.flatten())
    }

    fn check_due_date(&self, due_date: Option<DateTime<Utc>>) -> Result<()> {
        match due_date {
            Some(due) if due <= self.now => Err(ValidationError::DueDateNotInFuture),
            _ => Ok(()),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a path-supplied identifier
pub fn parse_item_id(raw: &str) -> Result<Uuid> {
    if raw.is_empty() {
        return Err(ValidationError::MissingId);
    }
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Parse an RFC 3339 timestamp supplied as a query parameter
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidTimestamp(raw.to_string()))
}
