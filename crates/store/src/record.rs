//! Record data structures, list filters, and pagination

use chrono::{DateTime, Utc};
use ql_core::QueryParams;
use serde::{Deserialize, Serialize};

/// A stored record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub topic: String,
    pub author: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields for a new record; the author is attached by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecord {
    pub name: String,
    pub subject: String,
    pub topic: String,
}

/// Optional list filters
///
/// `subject` matches the subject column case-insensitively as a substring;
/// `topic` matches either the topic or the name column the same way. When
/// both are present the subject condition is ANDed with the topic/name
/// disjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub subject: Option<String>,
    pub topic: Option<String>,
}

impl RecordFilter {
    /// Derive a filter from URL query state
    ///
    /// Absent and empty parameters both mean "no filter".
    pub fn from_params(params: &QueryParams) -> Self {
        let non_empty = |key: &str| {
            params
                .get(key)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            subject: non_empty("subject"),
            topic: non_empty("topic"),
        }
    }

    /// Whether no condition is set
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.topic.is_none()
    }
}

/// Convert a 1-based page to an inclusive row range
///
/// `page = 1` maps to rows `0..=limit-1`, `page = 2` to `limit..=2*limit-1`,
/// and so on: `from = (page-1)*limit`, `to = page*limit - 1`. A page of 0
/// clamps to 1 and a limit of 0 clamps to 1 so the range stays well-formed.
pub fn page_range(page: u32, limit: u32) -> (u64, u64) {
    let page = u64::from(page.max(1));
    let limit = u64::from(limit.max(1));
    ((page - 1) * limit, page * limit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_range_first_page() {
        assert_eq!(page_range(1, 10), (0, 9));
    }

    #[test]
    fn test_page_range_later_pages() {
        assert_eq!(page_range(2, 10), (10, 19));
        assert_eq!(page_range(3, 25), (50, 74));
    }

    #[test]
    fn test_page_range_clamps_page_zero() {
        assert_eq!(page_range(0, 10), page_range(1, 10));
    }

    #[test]
    fn test_page_range_clamps_limit_zero() {
        assert_eq!(page_range(1, 0), (0, 0));
    }

    #[test]
    fn test_filter_from_params() {
        let params = QueryParams::parse("subject=science&topic=cells&page=2");
        let filter = RecordFilter::from_params(&params);
        assert_eq!(filter.subject.as_deref(), Some("science"));
        assert_eq!(filter.topic.as_deref(), Some("cells"));
    }

    #[test]
    fn test_filter_treats_empty_param_as_absent() {
        let params = QueryParams::parse("subject=&topic=cells");
        let filter = RecordFilter::from_params(&params);
        assert_eq!(filter.subject, None);
        assert_eq!(filter.topic.as_deref(), Some("cells"));
    }

    #[test]
    fn test_filter_is_empty() {
        assert!(RecordFilter::default().is_empty());
        assert!(RecordFilter::from_params(&QueryParams::new()).is_empty());
    }

    #[test]
    fn test_record_deserializes_without_created_at() {
        let record: Record = serde_json::from_str(
            r#"{"id":7,"name":"Neura","subject":"science","topic":"neurons","author":"user_1"}"#,
        )
        .unwrap();
        assert_eq!(record.id, 7);
        assert!(record.created_at.is_none());
    }
}
