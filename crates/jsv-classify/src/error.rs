//! # Strict-Mode Diagnostics
//!
//! The default classification path is total and returns no errors.
//! Callers that want malformed `type` values reported instead of
//! silently degraded opt into [`crate::classify_strict`], which
//! surfaces the shapes below. Ambiguous (multi-entry) `type` arrays
//! are NOT errors in either mode; they are resolved by the fixed
//! priority order and at most logged.

use thiserror::Error;

/// A `type` keyword whose value is outside the dialect's grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTypeError {
    /// `type` holds something other than a string or an array.
    #[error("`type` must be a string or an array of strings, found {found}")]
    NotStringOrArray {
        /// JSON type name of the offending value (e.g. "number").
        found: String,
    },

    /// A scalar `type` or array element names an unknown primitive.
    #[error("unknown primitive type name in `type`: {name:?}")]
    UnknownName {
        /// The unrecognized name.
        name: String,
    },

    /// A `type` array element is not a string.
    #[error("`type` array element must be a string, found {found}")]
    NonStringElement {
        /// JSON type name of the offending element.
        found: String,
    },

    /// A `type` array names the same primitive twice.
    #[error("duplicate entry in `type` array: {name:?}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A `type` array with no elements constrains nothing and names nothing.
    #[error("`type` array is empty")]
    EmptyArray,
}

/// JSON type name of a value, for diagnostics.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
