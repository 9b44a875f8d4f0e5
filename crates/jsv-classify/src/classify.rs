//! # The Classification Decision Procedure
//!
//! `classify` maps any JSON value to exactly one [`Variant`]. The
//! procedure is total and pure: no input panics, no input errors, and
//! identical inputs always produce identical outputs (safe to call
//! concurrently, nothing is shared).
//!
//! Priority order, first match wins:
//!
//! 1. Boolean literal → its own structural case (classifies `Any`;
//!    it carries no keywords and is not the `Boolean` variant).
//! 2. Non-object, non-boolean value → `Any` (malformed input, tolerated
//!    for totality).
//! 3. String-valued `$ref` → `Reference`, before `type` is looked at.
//! 4. Declared `type` → that variant; a multi-entry `type` array is
//!    resolved by the fixed priority `null > boolean > string > number
//!    > integer > array > object` and logged. A malformed `type`
//!    degrades to step 5.
//! 5. Keyword inference over the exclusive-keyword table, tested in
//!    the order Null, Boolean, String, Number, Integer, Array, Object.
//!    Number precedes Integer by a fixed tie-break: the two share an
//!    identical exclusive-keyword set and cannot be told apart without
//!    a `type`.
//! 6. `Any`.
//!
//! [`classify_strict`] runs the same procedure but reports malformed
//! `type` values as [`MalformedTypeError`] instead of degrading past
//! them. Ambiguity is policy, not an error, in both modes.

use serde_json::{Map, Value};

use jsv_model::vocabulary::exclusive_keywords;
use jsv_model::{PrimitiveType, SchemaNode, Variant};

use crate::error::{json_type_name, MalformedTypeError};

/// Classify a schema node into exactly one variant. Total: every JSON
/// value yields a tag, malformed `type` values degrade to keyword
/// inference and then to `Any`.
pub fn classify(schema: &Value) -> Variant {
    match SchemaNode::from_value(schema) {
        // A literal schema constrains no particular instance type; the
        // `Boolean` variant is reserved for `type: "boolean"` objects.
        SchemaNode::BooleanLiteral(_) => Variant::Any,
        SchemaNode::Invalid(_) => Variant::Any,
        SchemaNode::Object(map) => classify_object(map),
    }
}

/// Classify with malformed-`type` diagnostics.
///
/// Identical decision procedure to [`classify`], except a `type` value
/// outside the dialect's grammar is returned as an error rather than
/// degraded past. A multi-entry `type` array is still resolved by
/// priority; ambiguity is not malformedness.
pub fn classify_strict(schema: &Value) -> Result<Variant, MalformedTypeError> {
    let map = match SchemaNode::from_value(schema) {
        SchemaNode::BooleanLiteral(_) | SchemaNode::Invalid(_) => return Ok(Variant::Any),
        SchemaNode::Object(map) => map,
    };

    if map.get("$ref").is_some_and(Value::is_string) {
        return Ok(Variant::Reference);
    }

    if let Some(type_value) = map.get("type") {
        let declared = declared_types_strict(type_value)?;
        return Ok(resolve_declared(&declared, type_value));
    }

    Ok(infer_from_keywords(map).unwrap_or(Variant::Any))
}

fn classify_object(map: &Map<String, Value>) -> Variant {
    if map.get("$ref").is_some_and(Value::is_string) {
        return Variant::Reference;
    }

    if let Some(type_value) = map.get("type") {
        let declared = declared_types_lenient(type_value);
        if declared.is_empty() {
            tracing::debug!(
                type_value = %type_value,
                "malformed `type` value, degrading to keyword inference",
            );
        } else {
            return resolve_declared(&declared, type_value);
        }
    }

    infer_from_keywords(map).unwrap_or(Variant::Any)
}

/// Salvage the legal primitive names out of a `type` value, deduplicated,
/// in document order. Unknown names, non-string elements, and non-string
/// non-array shapes contribute nothing.
fn declared_types_lenient(type_value: &Value) -> Vec<PrimitiveType> {
    let mut declared = Vec::new();
    let mut push = |name: &str| {
        if let Ok(primitive) = name.parse::<PrimitiveType>() {
            if !declared.contains(&primitive) {
                declared.push(primitive);
            }
        }
    };
    match type_value {
        Value::String(name) => push(name),
        Value::Array(names) => {
            for name in names.iter().filter_map(Value::as_str) {
                push(name);
            }
        }
        _ => {}
    }
    declared
}

/// Parse a `type` value under the dialect's grammar, rejecting every
/// malformed shape with a structured diagnostic.
fn declared_types_strict(type_value: &Value) -> Result<Vec<PrimitiveType>, MalformedTypeError> {
    match type_value {
        Value::String(name) => {
            let primitive = name
                .parse::<PrimitiveType>()
                .map_err(|e| MalformedTypeError::UnknownName { name: e.0 })?;
            Ok(vec![primitive])
        }
        Value::Array(names) => {
            if names.is_empty() {
                return Err(MalformedTypeError::EmptyArray);
            }
            let mut declared = Vec::with_capacity(names.len());
            for element in names {
                let name = element.as_str().ok_or_else(|| {
                    MalformedTypeError::NonStringElement {
                        found: json_type_name(element).to_string(),
                    }
                })?;
                let primitive = name
                    .parse::<PrimitiveType>()
                    .map_err(|e| MalformedTypeError::UnknownName { name: e.0 })?;
                if declared.contains(&primitive) {
                    return Err(MalformedTypeError::DuplicateName {
                        name: name.to_string(),
                    });
                }
                declared.push(primitive);
            }
            Ok(declared)
        }
        other => Err(MalformedTypeError::NotStringOrArray {
            found: json_type_name(other).to_string(),
        }),
    }
}

/// Pick one variant from a non-empty declared type list. A multi-entry
/// list is resolved by the fixed priority order and logged: callers
/// needing per-member narrowing use the predicates instead.
fn resolve_declared(declared: &[PrimitiveType], type_value: &Value) -> Variant {
    if declared.len() > 1 {
        tracing::warn!(
            type_value = %type_value,
            resolved = %declared_winner(declared),
            "ambiguous multi-type `type` array resolved by fixed priority",
        );
    }
    Variant::from_primitive(declared_winner(declared))
}

fn declared_winner(declared: &[PrimitiveType]) -> PrimitiveType {
    PrimitiveType::in_priority_order()
        .iter()
        .copied()
        .find(|primitive| declared.contains(primitive))
        // `declared` is non-empty and holds only the seven primitives.
        .unwrap_or(PrimitiveType::Null)
}

/// Infer a variant from the presence of exclusive keywords, in the
/// fixed table order. `None` when the node carries no type-specific
/// keyword at all.
fn infer_from_keywords(map: &Map<String, Value>) -> Option<Variant> {
    Variant::inference_order()
        .iter()
        .copied()
        .find(|variant| {
            exclusive_keywords(*variant)
                .iter()
                .any(|keyword| map.contains_key(*keyword))
        })
}
