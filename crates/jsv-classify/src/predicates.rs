//! # Narrowing Predicates
//!
//! Independent per-variant tests usable without running the full
//! classifier. Each predicate answers "could this node be read as an
//! X schema?": true when the node's `type` names the primitive
//! (scalar or anywhere in an array `type`), or, for variants with an
//! exclusive keyword vocabulary, when `type` is absent and one of
//! those keywords is present.
//!
//! The predicates are deliberately NOT mutually exclusive. A node with
//! `type: ["string", "number"]` satisfies both [`is_string_schema`]
//! and [`is_number_schema`]; picking a single tag is the classifier's
//! job, not theirs. All of them read the vocabulary tables in
//! `jsv-model` rather than re-deriving keyword membership, so they
//! cannot disagree with [`crate::classify`] about which keywords imply
//! which variant.

use serde_json::{Map, Value};

use jsv_model::vocabulary::exclusive_keywords;
use jsv_model::{PrimitiveType, SchemaNode, Variant};

/// Whether the node's `type` keyword names `primitive`, either as a
/// scalar or as an element of an array `type`. Non-string elements in
/// an array `type` are skipped, not rejected: the predicates stay total.
fn type_includes(map: &Map<String, Value>, primitive: PrimitiveType) -> bool {
    match map.get("type") {
        Some(Value::String(name)) => name == primitive.as_str(),
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .any(|name| name == primitive.as_str()),
        _ => false,
    }
}

/// Whether `type` is absent and the node carries a keyword exclusive
/// to `variant`.
fn inferred_by_keyword(map: &Map<String, Value>, variant: Variant) -> bool {
    !map.contains_key("type")
        && exclusive_keywords(variant)
            .iter()
            .any(|keyword| map.contains_key(*keyword))
}

/// Shared body of the seven per-primitive predicates.
fn is_variant_schema(schema: &Value, primitive: PrimitiveType) -> bool {
    let Some(map) = schema.as_object() else {
        return false;
    };
    type_includes(map, primitive) || inferred_by_keyword(map, Variant::from_primitive(primitive))
}

/// `type` names `null`. Never inferred from keywords: null schemas
/// carry nothing beyond the core vocabulary.
pub fn is_null_schema(schema: &Value) -> bool {
    is_variant_schema(schema, PrimitiveType::Null)
}

/// `type` names `boolean` (the object form). Never inferred from
/// keywords. The literal `true`/`false` schema does not satisfy this:
/// it is a structural case, not a boolean-typed schema.
pub fn is_boolean_schema(schema: &Value) -> bool {
    is_variant_schema(schema, PrimitiveType::Boolean)
}

/// `type` names `string`, or `type` is absent and a string-exclusive
/// keyword (`minLength`, `maxLength`, `pattern`) is present.
pub fn is_string_schema(schema: &Value) -> bool {
    is_variant_schema(schema, PrimitiveType::String)
}

/// `type` names `number`, or `type` is absent and a numeric keyword is
/// present. Satisfied together with [`is_integer_schema`] in the
/// inference case: the two variants share their keyword vocabulary.
pub fn is_number_schema(schema: &Value) -> bool {
    is_variant_schema(schema, PrimitiveType::Number)
}

/// `type` names `integer`, or `type` is absent and a numeric keyword
/// is present.
pub fn is_integer_schema(schema: &Value) -> bool {
    is_variant_schema(schema, PrimitiveType::Integer)
}

/// `type` names `array`, or `type` is absent and an array-exclusive
/// keyword is present.
pub fn is_array_schema(schema: &Value) -> bool {
    is_variant_schema(schema, PrimitiveType::Array)
}

/// `type` names `object`, or `type` is absent and an object-exclusive
/// keyword is present.
pub fn is_object_schema(schema: &Value) -> bool {
    is_variant_schema(schema, PrimitiveType::Object)
}

/// The node satisfies none of the seven typed predicates: it imposes
/// only core/common constraints applicable to every instance type.
/// True for boolean literal schemas and for non-schema-shaped values,
/// which carry no `type` and no keywords at all.
pub fn is_any_schema(schema: &Value) -> bool {
    PrimitiveType::all()
        .iter()
        .all(|primitive| !is_variant_schema(schema, *primitive))
}

/// The node is an object with a string-valued `$ref`.
pub fn is_reference(schema: &Value) -> bool {
    SchemaNode::from_value(schema).reference().is_some()
}
