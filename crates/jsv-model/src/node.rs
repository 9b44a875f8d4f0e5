//! # Schema Node: Borrowed View Over a Parsed Value
//!
//! A schema node arrives from the parsing collaborator as a
//! `serde_json::Value` and is consumed read-only. [`SchemaNode`]
//! borrows that value and names its structural shape: a boolean
//! literal schema, a keyword-bearing object, or an invalid shape
//! (null, number, string, or array at a schema position).
//!
//! The boolean literal case is load-bearing: `true`/`false` at a
//! schema position means "accepts everything"/"rejects everything" and
//! must never be conflated with an object schema declaring
//! `type: "boolean"`. Keeping the distinction structural, in the node
//! view before any keyword is inspected, makes the conflation
//! impossible downstream.
//!
//! Invalid shapes are tolerated rather than rejected so the classifier
//! stays total; a well-behaved parser never produces them.

use serde_json::{Map, Value};

use crate::vocabulary::{
    LIST_SUBSCHEMA_KEYWORDS, MAP_SUBSCHEMA_KEYWORDS, SINGLE_SUBSCHEMA_KEYWORDS,
};

/// Structural view of one schema node.
///
/// Borrows the underlying value; nothing here clones or mutates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaNode<'a> {
    /// The literal `true` or `false` schema. Accepts or rejects every
    /// instance; carries no keywords.
    BooleanLiteral(bool),
    /// A keyword-bearing object schema.
    Object(&'a Map<String, Value>),
    /// A value that is not a legal schema shape (null, number, string,
    /// or array). Classifies as `any`; never produced by a conforming
    /// parser.
    Invalid(&'a Value),
}

impl<'a> SchemaNode<'a> {
    /// Build the structural view of a parsed value.
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Bool(b) => Self::BooleanLiteral(*b),
            Value::Object(map) => Self::Object(map),
            other => Self::Invalid(other),
        }
    }

    /// Look up a keyword on this node. `None` for non-object nodes.
    pub fn keyword(&self, name: &str) -> Option<&'a Value> {
        match self {
            Self::Object(map) => map.get(name),
            Self::BooleanLiteral(_) | Self::Invalid(_) => None,
        }
    }

    /// Whether this node carries the named keyword.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keyword(name).is_some()
    }

    /// The raw value of the `type` keyword, if any.
    pub fn type_keyword(&self) -> Option<&'a Value> {
        self.keyword("type")
    }

    /// The `$ref` target, if this node is a reference.
    ///
    /// Only a string-valued `$ref` counts; a `$ref` holding any other
    /// JSON type is treated as an ordinary (unknown) keyword.
    pub fn reference(&self) -> Option<&'a str> {
        self.keyword("$ref").and_then(Value::as_str)
    }

    /// Every directly reachable child schema node, in keyword order.
    ///
    /// Walks the applicator surface of the dialect: single-subschema
    /// keywords (`not`, `items`, `contains`, `if`/`then`/`else`, ...),
    /// list-valued keywords (`allOf`, `anyOf`, `oneOf`, `prefixItems`)
    /// and map-valued keywords (`properties`, `patternProperties`,
    /// `dependentSchemas`, `$defs`). Each child is independently
    /// classifiable; nothing about a parent constrains a child's
    /// classification.
    pub fn subschemas(&self) -> Vec<&'a Value> {
        let Self::Object(map) = self else {
            return Vec::new();
        };

        let mut children = Vec::new();
        for (keyword, value) in map.iter() {
            if SINGLE_SUBSCHEMA_KEYWORDS.contains(&keyword.as_str()) {
                children.push(value);
            } else if LIST_SUBSCHEMA_KEYWORDS.contains(&keyword.as_str()) {
                if let Value::Array(items) = value {
                    children.extend(items.iter());
                }
            } else if MAP_SUBSCHEMA_KEYWORDS.contains(&keyword.as_str()) {
                if let Value::Object(entries) = value {
                    children.extend(entries.values());
                }
            }
        }
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_boolean_literal() {
        assert_eq!(SchemaNode::from_value(&json!(true)), SchemaNode::BooleanLiteral(true));
        assert_eq!(SchemaNode::from_value(&json!(false)), SchemaNode::BooleanLiteral(false));
    }

    #[test]
    fn test_from_value_object() {
        let schema = json!({"type": "string"});
        match SchemaNode::from_value(&schema) {
            SchemaNode::Object(map) => assert!(map.contains_key("type")),
            other => panic!("expected Object, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_invalid_shapes() {
        for value in [json!(null), json!(3), json!("x"), json!([1, 2])] {
            assert!(matches!(
                SchemaNode::from_value(&value),
                SchemaNode::Invalid(_)
            ));
        }
    }

    #[test]
    fn test_keyword_lookup() {
        let schema = json!({"minLength": 3});
        let node = SchemaNode::from_value(&schema);
        assert_eq!(node.keyword("minLength"), Some(&json!(3)));
        assert!(node.has_keyword("minLength"));
        assert!(!node.has_keyword("maxLength"));
    }

    #[test]
    fn test_boolean_literal_has_no_keywords() {
        let schema = json!(true);
        let node = SchemaNode::from_value(&schema);
        assert!(!node.has_keyword("type"));
        assert!(node.reference().is_none());
        assert!(node.subschemas().is_empty());
    }

    #[test]
    fn test_reference_requires_string_value() {
        let good = json!({"$ref": "#/$defs/foo"});
        assert_eq!(SchemaNode::from_value(&good).reference(), Some("#/$defs/foo"));

        let bad = json!({"$ref": 42});
        assert!(SchemaNode::from_value(&bad).reference().is_none());
    }

    #[test]
    fn test_subschemas_single_keywords() {
        let schema = json!({
            "not": {"type": "null"},
            "items": {"type": "string"},
            "if": {"required": ["a"]},
            "then": {"required": ["b"]},
            "else": {"required": ["c"]},
            "unevaluatedItems": false,
            "unevaluatedProperties": {"type": "string"}
        });
        let node = SchemaNode::from_value(&schema);
        assert_eq!(node.subschemas().len(), 7);
    }

    #[test]
    fn test_subschemas_list_keywords() {
        let schema = json!({
            "allOf": [{"minLength": 1}, {"maxLength": 9}],
            "prefixItems": [true, false]
        });
        let node = SchemaNode::from_value(&schema);
        assert_eq!(node.subschemas().len(), 4);
    }

    #[test]
    fn test_subschemas_map_keywords() {
        let schema = json!({
            "properties": {"a": {"type": "string"}, "b": true},
            "patternProperties": {"^x-": {}},
            "dependentSchemas": {"a": {"required": ["b"]}},
            "$defs": {"foo": {"type": "integer"}}
        });
        let node = SchemaNode::from_value(&schema);
        assert_eq!(node.subschemas().len(), 5);
    }

    #[test]
    fn test_subschemas_ignores_non_applicator_keywords() {
        let schema = json!({
            "type": "object",
            "required": ["a"],
            "description": "no children here",
            "enum": [{"looks": "like a schema"}]
        });
        let node = SchemaNode::from_value(&schema);
        assert!(node.subschemas().is_empty());
    }

    #[test]
    fn test_subschemas_malformed_applicator_values() {
        // A list applicator holding a non-array and a map applicator
        // holding a non-object contribute no children.
        let schema = json!({
            "allOf": {"not": "a list"},
            "properties": [1, 2, 3]
        });
        let node = SchemaNode::from_value(&schema);
        assert!(node.subschemas().is_empty());
    }
}
