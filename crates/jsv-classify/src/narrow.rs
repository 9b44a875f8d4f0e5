//! # Narrowing: Classification Plus Typed View
//!
//! [`narrow`] runs the classifier and then projects the node into the
//! matching payload shape from `jsv-model::typed`, dropping every
//! keyword outside that variant's vocabulary. Like `classify`, it is
//! total: a node whose keyword values do not fit the dialect's shapes
//! (say, a string-valued `minLength`) narrows to the variant's empty
//! payload rather than failing. Degradation is all-or-nothing: one
//! misfitting keyword value empties the whole view, well-formed
//! siblings included. Callers that need the salvageable parts of such
//! a node keep the raw value; the variant tag itself is unaffected.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use jsv_model::{
    AnySchema, ReferenceSchema, SchemaNode, TypedSchema, Variant,
};

use crate::classify::classify;

/// Classify a node and return its narrowed keyword view.
pub fn narrow(schema: &Value) -> TypedSchema {
    let map = match SchemaNode::from_value(schema) {
        SchemaNode::BooleanLiteral(literal) => return TypedSchema::BooleanLiteral(literal),
        SchemaNode::Invalid(_) => return TypedSchema::Any(AnySchema::default()),
        SchemaNode::Object(map) => map,
    };

    match classify(schema) {
        Variant::Null => TypedSchema::Null(payload(map)),
        Variant::Boolean => TypedSchema::Boolean(payload(map)),
        Variant::String => TypedSchema::String(payload(map)),
        Variant::Number => TypedSchema::Number(payload(map)),
        Variant::Integer => TypedSchema::Integer(payload(map)),
        Variant::Array => TypedSchema::Array(payload(map)),
        Variant::Object => TypedSchema::Object(payload(map)),
        Variant::Any => TypedSchema::Any(payload(map)),
        Variant::Reference => match map.get("$ref").and_then(Value::as_str) {
            Some(target) => TypedSchema::Reference(ReferenceSchema {
                reference: target.to_owned(),
            }),
            // Unreachable given the classifier's contract; stay total anyway.
            None => TypedSchema::Any(AnySchema::default()),
        },
    }
}

/// Deserialize the variant payload out of the keyword bag. Keywords the
/// payload does not declare are dropped; a value that does not fit its
/// declared shape degrades the whole payload to empty, not just the
/// offending field.
fn payload<T: DeserializeOwned + Default>(map: &Map<String, Value>) -> T {
    serde_json::from_value(Value::Object(map.clone())).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_narrow_agrees_with_classify() {
        let cases = [
            json!(true),
            json!({"type": "null"}),
            json!({"type": "boolean"}),
            json!({"type": "string", "minLength": 1}),
            json!({"type": ["integer"]}),
            json!({"minimum": 0}),
            json!({"items": true}),
            json!({"properties": {}}),
            json!({"$ref": "#/$defs/foo"}),
            json!({"description": "x"}),
            json!(null),
        ];
        for schema in &cases {
            assert_eq!(narrow(schema).variant(), classify(schema), "for {schema}");
        }
    }

    #[test]
    fn test_narrow_boolean_literal_is_structural() {
        assert_eq!(narrow(&json!(true)), TypedSchema::BooleanLiteral(true));
        assert_eq!(narrow(&json!(false)), TypedSchema::BooleanLiteral(false));
    }

    #[test]
    fn test_narrow_string_keeps_its_vocabulary() {
        let narrowed = narrow(&json!({
            "type": "string",
            "minLength": 2,
            "pattern": "^a",
            "title": "t",
            // Outside the string vocabulary; dropped by the view.
            "properties": {"x": true}
        }));
        let TypedSchema::String(view) = narrowed else {
            panic!("expected a string view, got {narrowed:?}");
        };
        assert_eq!(view.min_length, Some(2));
        assert_eq!(view.pattern.as_deref(), Some("^a"));
        assert_eq!(view.common.annotations.title.as_deref(), Some("t"));
        assert_eq!(serde_json::to_value(&view).unwrap()["properties"], json!(null));
    }

    #[test]
    fn test_narrow_number_and_integer_share_payload_shape() {
        let number = narrow(&json!({"type": "number", "minimum": 1}));
        let integer = narrow(&json!({"type": "integer", "minimum": 1}));
        match (&number, &integer) {
            (TypedSchema::Number(a), TypedSchema::Integer(b)) => assert_eq!(a, b),
            other => panic!("expected Number/Integer pair, got {other:?}"),
        }
    }

    #[test]
    fn test_narrow_reference_drops_siblings() {
        let narrowed = narrow(&json!({"$ref": "#/$defs/foo", "minLength": 3}));
        assert_eq!(
            narrowed,
            TypedSchema::Reference(ReferenceSchema {
                reference: "#/$defs/foo".to_string()
            })
        );
    }

    #[test]
    fn test_narrow_any_keeps_annotations_only() {
        let narrowed = narrow(&json!({
            "description": "free-form",
            "const": 9,
            "allOf": [{"type": "string"}]
        }));
        let TypedSchema::Any(view) = narrowed else {
            panic!("expected an any view, got {narrowed:?}");
        };
        assert_eq!(view.annotations.description.as_deref(), Some("free-form"));
        assert_eq!(view.annotations.const_value, Some(json!(9)));
        // Composition has no single-variant reading under `any`.
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({"description": "free-form", "const": 9})
        );
    }

    #[test]
    fn test_narrow_unfittable_values_degrade_to_empty_payload() {
        let narrowed = narrow(&json!({"type": "string", "minLength": "three"}));
        let TypedSchema::String(view) = narrowed else {
            panic!("expected a string view, got {narrowed:?}");
        };
        assert_eq!(view, Default::default());
    }

    #[test]
    fn test_narrow_degradation_is_all_or_nothing() {
        // One misfitting keyword empties the whole view; the
        // well-formed siblings are not salvaged. The variant tag is
        // decided before payload deserialization and survives.
        let narrowed = narrow(&json!({
            "type": "string",
            "minLength": "three",
            "title": "t",
            "pattern": "^a"
        }));
        let TypedSchema::String(view) = narrowed else {
            panic!("expected a string view, got {narrowed:?}");
        };
        assert_eq!(view.common.annotations.title, None);
        assert_eq!(view.pattern, None);
        assert_eq!(view, Default::default());
    }

    #[test]
    fn test_narrow_invalid_shape() {
        assert_eq!(narrow(&json!([1, 2])), TypedSchema::Any(AnySchema::default()));
    }
}
