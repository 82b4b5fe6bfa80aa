//! Shapes shared across endpoint groups.

use serde::{Deserialize, Serialize};

use super::trading::OrderResult;

/// A response that is either one object or an array of them, depending on
/// how broad the request filter was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Flatten into a vector, wrapping a single object.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Error body the exchange returns as `{"code": -1121, "msg": "..."}`,
/// either with an HTTP error status or inline in a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeMsg {
    pub code: i64,
    pub msg: String,
}

impl std::fmt::Display for CodeMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.msg, self.code)
    }
}

/// Outcome of a single order submission, cancellation or modification.
///
/// Batch endpoints return one entry per input order, index-aligned, with
/// rejected orders reported as [`OrderResponse::Rejected`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderResponse {
    Rejected(CodeMsg),
    Accepted(Box<OrderResult>),
}

impl OrderResponse {
    /// The accepted order, if any.
    pub fn accepted(&self) -> Option<&OrderResult> {
        match self {
            Self::Accepted(order) => Some(order),
            Self::Rejected(_) => None,
        }
    }

    /// Convert into a `Result`, treating an inline exchange error as `Err`.
    pub fn into_result(self) -> Result<OrderResult, CodeMsg> {
        match self {
            Self::Accepted(order) => Ok(*order),
            Self::Rejected(err) => Err(err),
        }
    }
}

/// Params carrying only a required symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolParam {
    pub symbol: String,
}

impl SymbolParam {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }
}

/// Optional symbol filter for account-wide queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalSymbolParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Filter by contract symbol (`BTCUSD_PERP`) or by pair (`BTCUSD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolOrPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
}

impl SymbolOrPair {
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self { symbol: Some(symbol.into()), pair: None }
    }

    pub fn pair(pair: impl Into<String>) -> Self {
        Self { symbol: None, pair: Some(pair.into()) }
    }
}

/// Serialize `Option<bool>` as `"true"`/`"false"`. The exchange reads
/// boolean flags as strings, including inside batch order JSON.
pub mod opt_bool_str {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(true) => serializer.serialize_str("true"),
            Some(false) => serializer.serialize_str("false"),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_or_many_wraps_single_object() {
        let one: OneOrMany<CodeMsg> = serde_json::from_str(r#"{"code":1,"msg":"a"}"#).unwrap();
        assert_eq!(one.into_vec().len(), 1);

        let many: OneOrMany<CodeMsg> =
            serde_json::from_str(r#"[{"code":1,"msg":"a"},{"code":2,"msg":"b"}]"#).unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn symbol_or_pair_skips_absent_fields() {
        let v = serde_json::to_value(SymbolOrPair::pair("BTCUSD")).unwrap();
        assert_eq!(v, serde_json::json!({"pair": "BTCUSD"}));
    }

    #[test]
    fn inline_error_is_rejected() {
        let r: OrderResponse =
            serde_json::from_str(r#"{"code":-2019,"msg":"Margin is insufficient."}"#).unwrap();
        let err = r.into_result().unwrap_err();
        assert_eq!(err.code, -2019);
    }
}
