//! Filter controls bound to the shared location
//!
//! Each control owns one debounced binding. The subject select maps its
//! `"all"` sentinel to the empty string *before* the value reaches the
//! synchronizer, so "all subjects" removes the parameter instead of
//! committing `subject=all`.

use ql_core::LocationProvider;
use ql_sync::{ParamBinding, ParamSync};
use std::sync::Arc;
use std::time::Duration;

/// Debounce window for both filter controls
pub const FILTER_DELAY: Duration = Duration::from_millis(500);

/// Sentinel select entry meaning "no subject filter"
pub const ALL_SUBJECTS: &str = "all";

/// The fixed subject list offered by the select
pub const SUBJECTS: &[&str] = &[
    "maths",
    "language",
    "science",
    "history",
    "coding",
    "economics",
];

/// Free-text topic search box
pub struct TopicSearch {
    sync: ParamSync,
    query: String,
}

impl TopicSearch {
    /// Bind to `topic`, seeded from the current URL state
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        let query = provider.params().get("topic").unwrap_or("").to_string();
        let sync = ParamSync::spawn(
            provider,
            ParamBinding::new(query.clone())
                .with_key("topic")
                .with_delay(FILTER_DELAY),
        );
        Self { sync, query }
    }

    /// Forward the current input text (no validation, any string passes)
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        self.sync.set(text);
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Single-select subject dropdown
pub struct SubjectSelect {
    sync: ParamSync,
    selected: String,
}

impl SubjectSelect {
    /// Bind to `subject`, seeded from the current URL state
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        let current = provider.params().get("subject").unwrap_or("").to_string();
        let selected = if current.is_empty() {
            ALL_SUBJECTS.to_string()
        } else {
            current.clone()
        };
        let sync = ParamSync::spawn(
            provider,
            ParamBinding::new(current)
                .with_key("subject")
                .with_delay(FILTER_DELAY),
        );
        Self { sync, selected }
    }

    /// Select a subject; returns false for entries not in the list
    pub fn select(&mut self, subject: &str) -> bool {
        if subject != ALL_SUBJECTS && !SUBJECTS.contains(&subject) {
            return false;
        }
        self.selected = subject.to_string();
        let forwarded = if subject == ALL_SUBJECTS { "" } else { subject };
        self.sync.set(forwarded);
        true
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }
}
