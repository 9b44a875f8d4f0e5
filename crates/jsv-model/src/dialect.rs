//! # Dialect Primitives: The Seven `type` Names
//!
//! Defines the `PrimitiveType` enum with the seven instance types a
//! 2020-12 `type` keyword may name. This is the ONE definition used
//! across the workspace; every `match` on `PrimitiveType` must be
//! exhaustive, so adding a type name (a new draft) forces every
//! consumer to handle it at compile time.
//!
//! Also exposes [`DIALECT_IDENTIFIER`], the `$schema` URI of the
//! dialect this model targets. The identifier is informational: nothing
//! in this workspace rejects a document whose `$schema` differs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// URI identifying the JSON Schema dialect this model targets.
///
/// Expected (not required) as the value of a `$schema` keyword on a
/// document root. Callers embedding this workspace may compare against
/// it; the model and classifier never enforce it.
pub const DIALECT_IDENTIFIER: &str = "https://json-schema.org/draft/2020-12/schema";

/// The seven primitive instance types a `type` keyword may name.
///
/// These are the only legal values of a scalar `type` and the only
/// legal elements of an array `type`. Anything else is a malformed
/// `type` value, which the classifier either degrades past (default
/// mode) or reports (strict mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// The JSON `null` value.
    Null,
    /// The JSON `true`/`false` values.
    Boolean,
    /// A JSON string.
    String,
    /// A JSON number with zero fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

/// Total number of primitive type names. Used for compile-time assertions.
pub const PRIMITIVE_TYPE_COUNT: usize = 7;

impl PrimitiveType {
    /// Returns all seven primitive types in the order the 2020-12 spec
    /// lists them (`null | boolean | string | integer | number | array
    /// | object`).
    pub fn all() -> &'static [PrimitiveType] {
        &[
            Self::Null,
            Self::Boolean,
            Self::String,
            Self::Integer,
            Self::Number,
            Self::Array,
            Self::Object,
        ]
    }

    /// Returns the seven primitive types in classification priority
    /// order: `null > boolean > string > number > integer > array >
    /// object`.
    ///
    /// When a `type` array names more than one primitive, the
    /// classifier must still return a single variant. The first entry
    /// of this list present in the array wins. The order is arbitrary
    /// but fixed; note that `number` deliberately precedes `integer`,
    /// matching the keyword-inference tie-break (the two share an
    /// identical exclusive-keyword set and are otherwise
    /// indistinguishable without a `type`).
    pub fn in_priority_order() -> &'static [PrimitiveType] {
        &[
            Self::Null,
            Self::Boolean,
            Self::String,
            Self::Number,
            Self::Integer,
            Self::Array,
            Self::Object,
        ]
    }

    /// Returns the lowercase string identifier for this primitive type.
    ///
    /// This must match the serde serialization format and the literal
    /// spellings used inside schema documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is not one of the seven primitive type names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown primitive type name: {0:?}")]
pub struct UnknownPrimitiveType(pub String);

impl FromStr for PrimitiveType {
    type Err = UnknownPrimitiveType;

    /// Parse a primitive type from its lowercase spelling.
    ///
    /// Case-sensitive, as `type` values are in schema documents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "boolean" => Ok(Self::Boolean),
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(UnknownPrimitiveType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(PrimitiveType::all().len(), PRIMITIVE_TYPE_COUNT);
        assert_eq!(PrimitiveType::in_priority_order().len(), PRIMITIVE_TYPE_COUNT);
    }

    #[test]
    fn test_all_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in PrimitiveType::all() {
            assert!(seen.insert(t), "Duplicate primitive type: {t}");
        }
    }

    #[test]
    fn test_priority_order_is_a_permutation() {
        let mut canonical: Vec<_> = PrimitiveType::all().to_vec();
        let mut priority: Vec<_> = PrimitiveType::in_priority_order().to_vec();
        canonical.sort_by_key(|t| t.as_str());
        priority.sort_by_key(|t| t.as_str());
        assert_eq!(canonical, priority);
    }

    #[test]
    fn test_number_precedes_integer_in_priority() {
        let order = PrimitiveType::in_priority_order();
        let number_pos = order.iter().position(|t| *t == PrimitiveType::Number).unwrap();
        let integer_pos = order.iter().position(|t| *t == PrimitiveType::Integer).unwrap();
        assert!(number_pos < integer_pos);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for t in PrimitiveType::all() {
            let parsed: PrimitiveType = t.as_str().parse().unwrap();
            assert_eq!(*t, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("nil".parse::<PrimitiveType>().is_err());
        assert!("String".parse::<PrimitiveType>().is_err()); // case-sensitive
        assert!("".parse::<PrimitiveType>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for t in PrimitiveType::all() {
            let json = serde_json::to_string(t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_dialect_identifier() {
        assert_eq!(
            DIALECT_IDENTIFIER,
            "https://json-schema.org/draft/2020-12/schema"
        );
    }
}
