//! Parameter Map - named values consumed by the rewriter
//!
//! Wraps the name-to-value map a template is resolved against. Values are
//! plain [`serde_json::Value`]s so callers can feed deserialized request
//! payloads straight in, and the map itself serializes transparently.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named parameters for a query template.
///
/// Keys are matched case-sensitively against placeholder names. A missing
/// key and an explicit `null` behave identically at rewrite time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(HashMap<String, Value>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Add a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a timestamp as RFC 3339 text.
    pub fn insert_datetime(&mut self, name: impl Into<String>, dt: DateTime<Utc>) {
        self.insert(name, dt.to_rfc3339());
    }

    /// Get a parameter by placeholder name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of named parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Value>> for Params {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Convenience macro for building [`Params`] from `"name" => value` pairs.
///
/// Keys are expressions, so dotted placeholder names like `"pr.code"` work
/// as-is:
///
/// ```
/// use dynwhere::params;
///
/// let p = params! {
///     "name" => "Jane",
///     "ids" => vec![1, 2, 3],
/// };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($name, $value);
        )+
        params
    }};
}
