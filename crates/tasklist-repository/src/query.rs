//! List query building
//!
//! `sort` and `order` request parameters are parsed into closed enumerations.
//! Each (field, direction) pair maps to one fixed `ORDER BY` fragment, so no
//! request byte is ever spliced into statement text. Filters travel as bound
//! parameters of a single fixed `WHERE` clause.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use tasklist_core::{Item, ItemStatus};

/// Columns a list may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Status,
    DueDate,
    #[default]
    CreatedAt,
}

impl SortField {
    /// Parse the `sort` parameter; anything outside the allow-list (including
    /// an empty or missing value) falls back to `created_at`
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("status") => SortField::Status,
            Some("due_date") => SortField::DueDate,
            Some("created_at") => SortField::CreatedAt,
            _ => SortField::default(),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the `order` parameter case-insensitively; unknown values are
    /// normalized to ascending
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Ordering requested for a list call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOrder {
    pub field: SortField,
    pub order: SortOrder,
}

impl ListOrder {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Build from raw `sort`/`order` query parameters
    pub fn from_params(sort: Option<&str>, order: Option<&str>) -> Self {
        Self::new(SortField::from_param(sort), SortOrder::from_param(order))
    }

    /// Fixed `ORDER BY` fragment for this ordering
    ///
    /// Rows without a due date sort last in both directions. Ties fall back
    /// to `created_at ASC, id ASC` so equal keys list deterministically.
    pub fn order_by_clause(&self) -> &'static str {
        match (self.field, self.order) {
            (SortField::Status, SortOrder::Asc) => "ORDER BY status ASC, created_at ASC, id ASC",
            (SortField::Status, SortOrder::Desc) => "ORDER BY status DESC, created_at ASC, id ASC",
            (SortField::DueDate, SortOrder::Asc) => {
                "ORDER BY due_date ASC NULLS LAST, created_at ASC, id ASC"
            }
            (SortField::DueDate, SortOrder::Desc) => {
                "ORDER BY due_date DESC NULLS LAST, created_at ASC, id ASC"
            }
            (SortField::CreatedAt, SortOrder::Asc) => "ORDER BY created_at ASC, id ASC",
            (SortField::CreatedAt, SortOrder::Desc) => "ORDER BY created_at DESC, id ASC",
        }
    }

    /// In-process equivalent of [`order_by_clause`](Self::order_by_clause),
    /// tie-breakers included
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let primary = match self.field {
            SortField::Status => self.order.apply(a.status.as_str().cmp(b.status.as_str())),
            SortField::CreatedAt => self.order.apply(a.created_at.cmp(&b.created_at)),
            SortField::DueDate => match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => self.order.apply(x.cmp(&y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        primary
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Optional restrictions on a list call
///
/// Due date bounds are exclusive, and an item without a due date never
/// matches a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub status: Option<ItemStatus>,
    pub due_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
}

impl ListFilter {
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn due_before(mut self, bound: DateTime<Utc>) -> Self {
        self.due_before = Some(bound);
        self
    }

    pub fn due_after(mut self, bound: DateTime<Utc>) -> Self {
        self.due_after = Some(bound);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.due_before.is_none() && self.due_after.is_none()
    }

    /// In-process equivalent of the `WHERE` clause
    pub fn matches(&self, item: &Item) -> bool {
        if self.status.is_some_and(|status| status != item.status) {
            return false;
        }
        if let Some(bound) = self.due_before {
            if !item.due_date.is_some_and(|due| due < bound) {
                return false;
            }
        }
        if let Some(bound) = self.due_after {
            if !item.due_date.is_some_and(|due| due > bound) {
                return false;
            }
        }
        true
    }
}

/// Filter plus ordering for one list call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub filter: ListFilter,
    pub order: ListOrder,
}

impl ListQuery {
    pub fn new(filter: ListFilter, order: ListOrder) -> Self {
        Self { filter, order }
    }

    /// Complete list statement
    ///
    /// A non-empty filter adds a fixed `WHERE` clause, which expects `$1` status,
    /// `$2` due-before and `$3` due-after to be bound (NULL for unset).
    pub fn list_statement(&self) -> String {
        if self.filter.is_empty() {
            format!(
                "SELECT {} FROM {} {}",
                ITEM_COLUMNS,
                ITEM_TABLE,
                self.order.order_by_clause()
            )
        } else {
            format!(
                "SELECT {} FROM {} {} {}",
                ITEM_COLUMNS,
                ITEM_TABLE,
                FILTER_CLAUSE,
                self.order.order_by_clause()
            )
        }
    }
}

impl From<ListOrder> for ListQuery {
    fn from(order: ListOrder) -> Self {
        Self::new(ListFilter::default(), order)
    }
}

impl From<ListFilter> for ListQuery {
    fn from(filter: ListFilter) -> Self {
        Self::new(filter, ListOrder::default())
    }
}

pub(crate) const FILTER_CLAUSE: &str = "WHERE ($1::text IS NULL OR status = $1) \
     AND ($2::timestamptz IS NULL OR due_date < $2) \
     AND ($3::timestamptz IS NULL OR due_date > $3)";

pub(crate) const ITEM_TABLE: &str = "list";

pub(crate) const ITEM_COLUMNS: &str =
    "id, title, description, status, due_date, created_at, updated_at";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tasklist_core::{ItemPayload, ItemStatus};
    use uuid::Uuid;

    #[test]
    fn test_sort_field_allow_list() {
        assert_eq!(SortField::from_param(Some("status")), SortField::Status);
        assert_eq!(SortField::from_param(Some("due_date")), SortField::DueDate);
        assert_eq!(SortField::from_param(Some("created_at")), SortField::CreatedAt);
    }

    #[test]
    fn test_sort_field_falls_back_to_created_at() {
        assert_eq!(SortField::from_param(None), SortField::CreatedAt);
        assert_eq!(SortField::from_param(Some("")), SortField::CreatedAt);
        assert_eq!(SortField::from_param(Some("title")), SortField::CreatedAt);
        assert_eq!(SortField::from_param(Some("STATUS")), SortField::CreatedAt);
    }

    #[test]
    fn test_sort_order_normalization() {
        assert_eq!(SortOrder::from_param(None), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(Some("")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("sideways")), SortOrder::Asc);
    }

    #[test]
    fn test_default_clause() {
        assert_eq!(
            ListOrder::default().order_by_clause(),
            "ORDER BY created_at ASC, id ASC"
        );
    }

    #[test]
    fn test_injection_attempt_never_reaches_statement() {
        let order = ListOrder::from_params(
            Some("created_at; DROP TABLE list"),
            Some("ASC; DELETE FROM list"),
        );
        let sql = ListQuery::from(order).list_statement();

        assert_eq!(
            sql,
            "SELECT id, title, description, status, due_date, created_at, updated_at \
             FROM list ORDER BY created_at ASC, id ASC"
        );
        assert!(!sql.contains("DROP"));
        assert!(!sql.contains("DELETE"));
    }

    #[test]
    fn test_every_combination_has_primary_key_and_tie_breakers() {
        let cases = [
            (SortField::Status, SortOrder::Asc, "ORDER BY status ASC,"),
            (SortField::Status, SortOrder::Desc, "ORDER BY status DESC,"),
            (SortField::DueDate, SortOrder::Asc, "ORDER BY due_date ASC NULLS LAST,"),
            (SortField::DueDate, SortOrder::Desc, "ORDER BY due_date DESC NULLS LAST,"),
            (SortField::CreatedAt, SortOrder::Asc, "ORDER BY created_at ASC,"),
            (SortField::CreatedAt, SortOrder::Desc, "ORDER BY created_at DESC,"),
        ];

        for (field, order, prefix) in cases {
            let clause = ListOrder::new(field, order).order_by_clause();
            assert!(clause.starts_with(prefix), "{}", clause);
            assert!(clause.ends_with("id ASC"), "{}", clause);
        }
    }

    #[test]
    fn test_compare_breaks_ties_by_created_at_then_id() {
        let now = Utc::now();
        let older = Item::from_payload(Uuid::new_v4(), ItemPayload::new("a", "b"), now);
        let newer = Item::from_payload(
            Uuid::new_v4(),
            ItemPayload::new("c", "d"),
            now + Duration::seconds(1),
        );

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let by_status = ListOrder::new(SortField::Status, order);
            assert_eq!(by_status.compare(&older, &newer), Ordering::Less);
        }

        let mut twin = older.clone();
        twin.id = Uuid::from_u128(older.id.as_u128().wrapping_add(1));
        let by_due = ListOrder::new(SortField::DueDate, SortOrder::Desc);
        assert_eq!(by_due.compare(&older, &twin), older.id.cmp(&twin.id));
    }

    #[test]
    fn test_filtered_statement_binds_instead_of_splicing() {
        let filter = ListFilter::default().with_status(ItemStatus::Doing);
        let sql = ListQuery::new(filter, ListOrder::default()).list_statement();

        assert!(sql.contains("WHERE ($1::text IS NULL OR status = $1)"));
        assert!(sql.contains("due_date < $2"));
        assert!(sql.contains("due_date > $3"));
        assert!(sql.ends_with("ORDER BY created_at ASC, id ASC"));
        assert!(!sql.contains("doing"));
    }

    #[test]
    fn test_unfiltered_statement_has_no_where() {
        let sql = ListQuery::default().list_statement();
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_filter_matches() {
        let now = Utc::now();
        let due_soon = Item::from_payload(
            Uuid::new_v4(),
            ItemPayload::new("a", "b")
                .with_status(ItemStatus::Doing)
                .with_due_date(now + Duration::days(1)),
            now,
        );
        let undated = Item::from_payload(Uuid::new_v4(), ItemPayload::new("c", "d"), now);

        assert!(ListFilter::default().matches(&undated));
        assert!(ListFilter::default().with_status(ItemStatus::Doing).matches(&due_soon));
        assert!(!ListFilter::default().with_status(ItemStatus::ToDo).matches(&due_soon));

        let before = ListFilter::default().due_before(now + Duration::days(2));
        assert!(before.matches(&due_soon));
        assert!(!before.matches(&undated));

        let after = ListFilter::default().due_after(now + Duration::days(1));
        assert!(!after.matches(&due_soon));
        assert!(!after.matches(&undated));
    }

    #[test]
    fn test_compare_due_date_puts_missing_last() {
        let now = Utc::now();
        let with_due = Item::from_payload(
            Uuid::new_v4(),
            ItemPayload::new("a", "b").with_due_date(now + Duration::days(1)),
            now,
        );
        let without_due = Item::from_payload(Uuid::new_v4(), ItemPayload::new("c", "d"), now);

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let list_order = ListOrder::new(SortField::DueDate, order);
            assert_eq!(list_order.compare(&with_due, &without_due), Ordering::Less);
            assert_eq!(list_order.compare(&without_due, &with_due), Ordering::Greater);
        }
    }

    #[test]
    fn test_compare_status_is_lexical() {
        let now = Utc::now();
        let doing = Item::from_payload(
            Uuid::new_v4(),
            ItemPayload::new("a", "b").with_status(ItemStatus::Doing),
            now,
        );
        let completed = Item::from_payload(
            Uuid::new_v4(),
            ItemPayload::new("a", "b").with_status(ItemStatus::Completed),
            now,
        );

        let asc = ListOrder::new(SortField::Status, SortOrder::Asc);
        assert_eq!(asc.compare(&completed, &doing), Ordering::Less);
        let desc = ListOrder::new(SortField::Status, SortOrder::Desc);
        assert_eq!(desc.compare(&completed, &doing), Ordering::Greater);
    }
}
