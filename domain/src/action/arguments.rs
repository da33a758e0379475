//! Argument bag — defensive access to loosely-typed tool arguments
//!
//! Models send arguments as a JSON object whose values may be strings,
//! numbers (often floats even for integers), arrays or missing entirely.
//! Every accessor here tolerates absence and wrong types; only the
//! `require_*` accessors turn those into an [`ArgumentError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use super::entities::{Action, ArgSpec};

/// Default page size for list/search actions
pub const DEFAULT_LIMIT: i64 = 10;
/// Smallest accepted page size
pub const MIN_LIMIT: i64 = 1;
/// Largest accepted page size
pub const MAX_LIMIT: i64 = 50;

/// Validation failure detected before any request is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("action is required")]
    MissingAction,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("{key} is required for {action}")]
    Missing { key: String, action: String },

    #[error("{key} must be {expected} for {action}")]
    WrongType {
        key: String,
        expected: &'static str,
        action: String,
    },

    #[error("no updates specified (provide title, content, or tags)")]
    NoUpdates,

    #[error("action {action} is not supported by the {backend} backend")]
    Unsupported { action: String, backend: String },
}

impl ArgumentError {
    pub fn missing(key: impl Into<String>, action: Action) -> Self {
        Self::Missing {
            key: key.into(),
            action: action.as_str().to_string(),
        }
    }
}

/// Untyped mapping from argument name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentBag {
    values: HashMap<String, Value>,
}

impl ArgumentBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an arbitrary JSON value; anything but an object yields an
    /// empty bag.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                values: map.into_iter().collect(),
            },
            _ => Self::default(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    /// Get a string argument, treating the empty string as absent
    pub fn get_non_empty_string(&self, key: &str) -> Option<&str> {
        self.get_string(key).filter(|s| !s.is_empty())
    }

    /// Get an integer argument.
    ///
    /// JSON numbers produced by models are frequently floats (`10.0`), so
    /// those are accepted and truncated.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let value = self.values.get(key)?;
        value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
    }

    /// Get a list of strings. Non-string elements are dropped; a non-array
    /// value counts as absent.
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        self.values.get(key).and_then(|v| v.as_array()).map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
    }

    /// Resolve the `action` argument.
    pub fn action(&self) -> Result<Action, ArgumentError> {
        let name = self
            .get_string("action")
            .ok_or(ArgumentError::MissingAction)?;
        name.parse()
            .map_err(|_| ArgumentError::UnknownAction(name.to_string()))
    }

    /// Get a required string argument, trying the spec's alternative keys in
    /// order.
    pub fn require_string(&self, spec: &ArgSpec, action: Action) -> Result<&str, ArgumentError> {
        let mut wrong_type = false;
        for key in spec.keys() {
            match self.values.get(key) {
                Some(Value::String(s)) => return Ok(s.as_str()),
                Some(Value::Null) | None => {}
                Some(_) => wrong_type = true,
            }
        }

        if wrong_type {
            Err(ArgumentError::WrongType {
                key: spec.key.to_string(),
                expected: "a string",
                action: action.as_str().to_string(),
            })
        } else {
            Err(ArgumentError::missing(spec.key, action))
        }
    }

    /// Check every required argument of `action`.
    pub fn validate_for(&self, action: Action) -> Result<(), ArgumentError> {
        for spec in action.required_args() {
            self.require_string(spec, action)?;
        }
        Ok(())
    }

    /// Result-count limit with default and clamping applied.
    pub fn limit(&self) -> i64 {
        self.get_i64("limit")
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(MIN_LIMIT, MAX_LIMIT)
    }
}

impl From<HashMap<String, Value>> for ArgumentBag {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_action() {
        let bag = ArgumentBag::new();
        assert_eq!(bag.action().unwrap_err(), ArgumentError::MissingAction);
        assert_eq!(bag.action().unwrap_err().to_string(), "action is required");
    }

    #[test]
    fn test_non_string_action_is_missing() {
        let bag = ArgumentBag::new().with_arg("action", 42);
        assert_eq!(bag.action().unwrap_err(), ArgumentError::MissingAction);
    }

    #[test]
    fn test_unknown_action() {
        let bag = ArgumentBag::new().with_arg("action", "invalid_action");
        assert!(bag.action().unwrap_err().to_string().contains("unknown action"));
    }

    #[test]
    fn test_require_string_missing_names_key_and_action() {
        let bag = ArgumentBag::new().with_arg("action", "search");
        let err = bag.validate_for(Action::Search).unwrap_err();
        assert_eq!(err.to_string(), "query is required for search");
    }

    #[test]
    fn test_require_string_wrong_type() {
        let bag = ArgumentBag::new().with_arg("title", json!(["not", "a", "string"]));
        let err = bag.validate_for(Action::Create).unwrap_err();
        assert!(matches!(err, ArgumentError::WrongType { .. }));
        assert!(err.to_string().contains("title"));
        assert!(err.to_string().contains("create"));
    }

    #[test]
    fn test_require_string_alternative_key() {
        let bag = ArgumentBag::new().with_arg("query", "doc-1");
        let spec = Action::Read.required_args()[0];
        assert_eq!(bag.require_string(&spec, Action::Read).unwrap(), "doc-1");
    }

    #[test]
    fn test_primary_key_wins_over_alternative() {
        let bag = ArgumentBag::new()
            .with_arg("page_id", "page-1")
            .with_arg("query", "doc-1");
        let spec = Action::Read.required_args()[0];
        assert_eq!(bag.require_string(&spec, Action::Read).unwrap(), "page-1");
    }

    #[test]
    fn test_limit_default_and_clamp() {
        assert_eq!(ArgumentBag::new().limit(), DEFAULT_LIMIT);
        assert_eq!(ArgumentBag::new().with_arg("limit", 0).limit(), 1);
        assert_eq!(ArgumentBag::new().with_arg("limit", 500).limit(), 50);
        assert_eq!(ArgumentBag::new().with_arg("limit", 20.0).limit(), 20);
        assert_eq!(ArgumentBag::new().with_arg("limit", "lots").limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_string_list_drops_non_strings() {
        let bag = ArgumentBag::new().with_arg("tags", json!(["x", 1, "y", null]));
        assert_eq!(bag.get_string_list("tags").unwrap(), vec!["x", "y"]);
        assert!(ArgumentBag::new().with_arg("tags", "x").get_string_list("tags").is_none());
    }

    #[test]
    fn test_from_value_non_object() {
        assert!(ArgumentBag::from_value(json!([1, 2])).is_empty());
        let bag = ArgumentBag::from_value(json!({"action": "search"}));
        assert_eq!(bag.get_string("action"), Some("search"));
    }
}
