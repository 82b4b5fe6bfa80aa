//! Request parameter bag.
//!
//! Endpoint methods take typed param structs; the transport needs flat
//! `name=value` pairs. [`ParamBag`] bridges the two through
//! `serde_json::Value`, which keeps the serde renames and skips of the param
//! types as the single source of truth for field names.

use coinm_core::error::CoinMError;
use serde::Serialize;
use serde_json::Value;

/// Ordered `(name, value)` pairs for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamBag {
    pairs: Vec<(String, String)>,
}

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a param struct.
    ///
    /// Strings go in verbatim, numbers and bools via their JSON text, arrays
    /// and nested objects as compact JSON (the exchange reads list params
    /// such as `orderIdList` that way). `null`s are dropped.
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self, CoinMError> {
        let value = serde_json::to_value(params).map_err(|e| CoinMError::Parse(e.to_string()))?;
        match value {
            Value::Object(map) => {
                let pairs = map
                    .into_iter()
                    .filter_map(|(k, v)| render_value(v).map(|v| (k, v)))
                    .collect();
                Ok(Self { pairs })
            }
            Value::Null => Ok(Self::new()),
            other => Err(CoinMError::Parse(format!("request params must be an object, got {other}"))),
        }
    }

    /// Append a pair.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URL-encoded query string, without a leading `?`.
    pub fn to_query(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn render_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        v @ (Value::Array(_) | Value::Object(_)) => Some(v.to_string()),
    }
}
