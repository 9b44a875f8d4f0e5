//! # Typed Views: One Payload Shape Per Variant
//!
//! The narrowed view of a classified node: a tagged union with one
//! payload struct per variant, each exposing only that variant's legal
//! keyword set. The shared core vocabulary lives in one place
//! ([`Annotations`] and [`CommonKeywords`]) and is flattened into every
//! payload, so the declared shapes cannot drift apart from each other
//! or from the vocabulary tables.
//!
//! Composition subschemas (`allOf`, `anyOf`, `oneOf`, `not`) are held
//! permissively as raw `serde_json::Value` nodes rather than typed
//! same-variant payloads. Re-classify a child with `jsv-classify` when
//! a typed view of it is needed.
//!
//! Unknown keywords on a node are dropped during narrowing; that is
//! the point of the narrowed view. The raw node remains the source of
//! truth for anything outside the variant's vocabulary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use crate::variant::Variant;

/// Annotation keywords legal on every variant, including `any`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotations {
    /// The `const` keyword. Constrains instances to a single value.
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The `enum` keyword. Constrains instances to a fixed value set.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
}

/// The full core vocabulary: annotations plus composition applicators.
///
/// Every typed variant carries this; `any` carries [`Annotations`]
/// alone, since a node with composition applicators still classifies
/// as `any` but its narrowed view deliberately omits them (they have
/// no single-variant reading).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonKeywords {
    #[serde(flatten)]
    pub annotations: Annotations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Value>>,
}

/// Narrowed view of a `null` schema. Core vocabulary only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NullSchema {
    #[serde(flatten)]
    pub common: CommonKeywords,
}

/// Narrowed view of a `boolean`-typed schema (the object form, not the
/// boolean literal). Core vocabulary only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanSchema {
    #[serde(flatten)]
    pub common: CommonKeywords,
}

/// Narrowed view of a `string` schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    #[serde(flatten)]
    pub common: CommonKeywords,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Narrowed view of a `number` or `integer` schema.
///
/// The two variants share an identical keyword vocabulary, so they
/// share a payload shape; the [`TypedSchema`] tag records which of the
/// two the node classified as.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericSchema {
    #[serde(flatten)]
    pub common: CommonKeywords,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
}

/// Narrowed view of an `array` schema. Subschema-valued keywords are
/// permissive raw nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySchema {
    #[serde(flatten)]
    pub common: CommonKeywords,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Box<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_contains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_items: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
}

/// Narrowed view of an `object` schema. Subschema-valued keywords are
/// permissive raw nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    #[serde(flatten)]
    pub common: CommonKeywords,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_required: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_properties: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Box<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// Narrowed view of an `any` schema: annotations only. A node carrying
/// no type-specific keywords constrains every instance type the same
/// way, and only through its annotations and `const`/`enum`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnySchema {
    #[serde(flatten)]
    pub annotations: Annotations,
}

/// Narrowed view of a reference node.
///
/// The reference is exclusive of every other variant: sibling keywords
/// next to `$ref` are permitted by 2020-12 but this model drops them
/// from the narrowed view and leaves their interpretation to the
/// resolving collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSchema {
    /// URI-reference naming the target schema.
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// A classified schema node with its narrowed keyword view.
///
/// One payload shape per tag. `BooleanLiteral` is the structural
/// `true`/`false` schema, kept distinct from `Boolean`, which is the
/// object form declaring `type: "boolean"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedSchema {
    Null(NullSchema),
    Boolean(BooleanSchema),
    String(StringSchema),
    Number(NumericSchema),
    Integer(NumericSchema),
    Array(ArraySchema),
    Object(ObjectSchema),
    Any(AnySchema),
    Reference(ReferenceSchema),
    /// The literal `true`/`false` schema.
    BooleanLiteral(bool),
}

impl TypedSchema {
    /// The variant tag this view was narrowed under.
    ///
    /// A boolean literal reports `Any`: it imposes no type-specific
    /// constraint, and the classifier assigns it the same tag. The
    /// structural distinction survives in the enum itself.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Null(_) => Variant::Null,
            Self::Boolean(_) => Variant::Boolean,
            Self::String(_) => Variant::String,
            Self::Number(_) => Variant::Number,
            Self::Integer(_) => Variant::Integer,
            Self::Array(_) => Variant::Array,
            Self::Object(_) => Variant::Object,
            Self::Any(_) | Self::BooleanLiteral(_) => Variant::Any,
            Self::Reference(_) => Variant::Reference,
        }
    }
}
