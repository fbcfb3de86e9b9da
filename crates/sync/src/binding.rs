//! Binding configuration for one synchronized query parameter

use std::time::Duration;

/// Query-string key used when none is given
pub const DEFAULT_KEY: &str = "topic";

/// Debounce window used when none is given
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// The triple driving one synchronizer instance
///
/// `value` is the desired current string; the empty string means "absent"
/// and removes the key on commit. Values are not validated: any string
/// passes through to the query string as-is.
#[derive(Debug, Clone)]
pub struct ParamBinding {
    /// Query parameter name to keep in sync
    pub key: String,
    /// Desired value at spawn time
    pub value: String,
    /// Quiet window that must elapse before a commit
    pub delay: Duration,
}

impl ParamBinding {
    /// Create a binding for `value` with the default key and delay
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            value: value.into(),
            delay: DEFAULT_DELAY,
        }
    }

    /// Use a different query parameter name
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Use a different debounce window
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let binding = ParamBinding::new("biology");
        assert_eq!(binding.key, "topic");
        assert_eq!(binding.value, "biology");
        assert_eq!(binding.delay, Duration::from_millis(300));
    }

    #[test]
    fn test_builder_overrides() {
        let binding = ParamBinding::new("science")
            .with_key("subject")
            .with_delay(Duration::from_millis(500));
        assert_eq!(binding.key, "subject");
        assert_eq!(binding.delay, Duration::from_millis(500));
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let binding = ParamBinding::new("");
        assert_eq!(binding.value, "");
    }
}
