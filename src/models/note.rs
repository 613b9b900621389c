use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A persisted note
///
/// Wire format is camelCase (`createdAt`); `created_at` is assigned once
/// at creation and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Check the non-empty-after-trim rule for both note fields.
///
/// Returns one human-readable message per violated field, keyed by the
/// property name used on the wire.
pub fn validate_note_fields(title: &str, text: &str) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if title.trim().is_empty() {
        errors.insert(
            "title".to_string(),
            "This value should not be blank.".to_string(),
        );
    }
    if text.trim().is_empty() {
        errors.insert(
            "text".to_string(),
            "This value should not be blank.".to_string(),
        );
    }

    errors
}

/// Body for `POST /note/add`
///
/// Missing fields behave like empty ones and fail validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Body for `PUT /note/{id}` — absent fields keep their stored value
#[derive(Debug, Clone, Deserialize)]
pub struct EditNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Query string for `GET /notes`
#[derive(Debug, Clone, Deserialize)]
pub struct ListNotesQuery {
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

/// Sort direction for note listings, always keyed on `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Descending
    }
}

/// Store-level listing parameters; every field is independently optional
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub search: Option<String>,
    pub order: SortOrder,
    pub limit: Option<i64>,
}

impl From<ListNotesQuery> for NoteFilter {
    fn from(query: ListNotesQuery) -> Self {
        // Only the literal "oldest" flips the order; anything else keeps
        // the newest-first default.
        let order = match query.sort.as_deref() {
            Some("oldest") => SortOrder::Ascending,
            _ => SortOrder::Descending,
        };

        // Non-positive limits impose no cap.
        let limit = query.limit.filter(|l| *l > 0);

        NoteFilter {
            search: query.search,
            order,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(sort: Option<&str>, limit: Option<i64>, search: Option<&str>) -> ListNotesQuery {
        ListNotesQuery {
            sort: sort.map(|s| s.to_string()),
            limit,
            search: search.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let filter = NoteFilter::from(query(None, None, None));
        assert_eq!(filter.order, SortOrder::Descending);
        assert!(filter.limit.is_none());
        assert!(filter.search.is_none());
    }

    #[test]
    fn test_oldest_flips_order() {
        let filter = NoteFilter::from(query(Some("oldest"), None, None));
        assert_eq!(filter.order, SortOrder::Ascending);
    }

    #[test]
    fn test_unknown_sort_value_keeps_default_order() {
        let filter = NoteFilter::from(query(Some("newest"), None, None));
        assert_eq!(filter.order, SortOrder::Descending);
    }

    #[test]
    fn test_non_positive_limit_is_dropped() {
        assert!(NoteFilter::from(query(None, Some(0), None)).limit.is_none());
        assert!(NoteFilter::from(query(None, Some(-3), None)).limit.is_none());
        assert_eq!(NoteFilter::from(query(None, Some(2), None)).limit, Some(2));
    }

    #[test]
    fn test_validate_reports_each_blank_field() {
        let errors = validate_note_fields("  ", "");
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("text"));

        let errors = validate_note_fields("a title", "");
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("text"));

        assert!(validate_note_fields("a title", "some text").is_empty());
    }
}
