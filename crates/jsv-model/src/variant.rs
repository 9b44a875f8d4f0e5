//! # Variant: The Nine Classification Tags
//!
//! A schema node is classified into exactly one [`Variant`]. Seven of
//! the tags mirror the primitive instance types; `Any` covers nodes
//! that constrain no particular instance type, and `Reference` covers
//! nodes whose meaning lives behind a `$ref`.
//!
//! The `Boolean` variant means "an object-shaped schema declaring
//! `type: \"boolean\"`". A bare boolean literal schema (`true`/`false`)
//! is a different thing entirely; it is represented structurally by
//! [`crate::SchemaNode::BooleanLiteral`] and classifies as `Any`.

use serde::{Deserialize, Serialize};

use crate::dialect::PrimitiveType;

/// The semantic category a schema node belongs to.
///
/// Exactly one tag per node. The classifier guarantees totality: every
/// JSON value, however malformed as a schema, maps to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Schema for the `null` instance.
    Null,
    /// Schema declaring `type: "boolean"` (not the boolean literal form).
    Boolean,
    /// Schema for string instances.
    String,
    /// Schema for arbitrary numeric instances.
    Number,
    /// Schema for integer instances.
    Integer,
    /// Schema for array instances.
    Array,
    /// Schema for object instances.
    Object,
    /// Schema constraining no particular instance type (core keywords only).
    Any,
    /// Schema delegating to another schema via `$ref`.
    Reference,
}

/// Total number of variants. Used for compile-time assertions.
pub const VARIANT_COUNT: usize = 9;

impl Variant {
    /// Returns all nine variants in canonical order.
    pub fn all() -> &'static [Variant] {
        &[
            Self::Null,
            Self::Boolean,
            Self::String,
            Self::Number,
            Self::Integer,
            Self::Array,
            Self::Object,
            Self::Any,
            Self::Reference,
        ]
    }

    /// Returns the variants eligible for keyword inference, in the
    /// fixed order the classifier tests them: Null, Boolean, String,
    /// Number, Integer, Array, Object.
    ///
    /// Null and Boolean have empty exclusive-keyword sets and can never
    /// actually win this way; they are listed so the inference loop is
    /// the table order, not a hand-maintained subset of it.
    pub fn inference_order() -> &'static [Variant] {
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

    /// The variant corresponding to a declared primitive type name.
    pub fn from_primitive(primitive: PrimitiveType) -> Variant {
        match primitive {
            PrimitiveType::Null => Self::Null,
            PrimitiveType::Boolean => Self::Boolean,
            PrimitiveType::String => Self::String,
            PrimitiveType::Integer => Self::Integer,
            PrimitiveType::Number => Self::Number,
            PrimitiveType::Array => Self::Array,
            PrimitiveType::Object => Self::Object,
        }
    }

    /// Returns the lowercase string identifier for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Array => "array",
            Self::Object => "object",
            Self::Any => "any",
            Self::Reference => "reference",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
