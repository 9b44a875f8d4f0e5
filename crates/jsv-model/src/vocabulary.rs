//! # Keyword Vocabulary: Single Source of Truth
//!
//! The authoritative mapping from keyword names to the variants whose
//! presence they imply. The classifier and the narrowing predicates are
//! both driven off these tables; there is no second copy of "which
//! keywords belong to strings" anywhere in the workspace, so the
//! predicates cannot drift out of agreement with `classify` on edge
//! cases.
//!
//! Keyword groups follow the 2020-12 vocabulary sections: annotations,
//! composition applicators, identifiers, conditionals, per-type
//! validation keywords, and the unevaluated-locations pair. Only the
//! per-type validation groups participate in classification; the rest
//! are listed so the model is a complete account of the dialect's
//! surface.

use crate::variant::Variant;

/// Annotation keywords legal on every variant (including `Any`).
pub const ANNOTATION_KEYWORDS: &[&str] = &[
    "const",
    "default",
    "deprecated",
    "description",
    "enum",
    "examples",
    "readOnly",
    "title",
    "writeOnly",
];

/// Composition applicators legal on every typed variant.
pub const COMPOSITION_KEYWORDS: &[&str] = &["allOf", "anyOf", "not", "oneOf"];

/// Core identifier keywords (`$`-prefixed). `$ref` is special-cased by
/// the classifier; the rest are inert for classification purposes.
pub const IDENTIFIER_KEYWORDS: &[&str] = &[
    "$anchor",
    "$comment",
    "$defs",
    "$dynamicAnchor",
    "$dynamicRef",
    "$id",
    "$ref",
    "$schema",
    "$vocabulary",
];

/// Conditional applicators. Inert for classification.
pub const CONDITIONAL_KEYWORDS: &[&str] = &["dependentSchemas", "else", "if", "then"];

/// The `format` annotation. Inert for classification: format names
/// exist for several instance types and imply none of them.
pub const FORMAT_KEYWORD: &str = "format";

/// Unevaluated-locations applicators. Inert for classification.
pub const UNEVALUATED_KEYWORDS: &[&str] = &["unevaluatedItems", "unevaluatedProperties"];

/// Validation keywords exclusive to string schemas.
pub const STRING_KEYWORDS: &[&str] = &["maxLength", "minLength", "pattern"];

/// Validation keywords shared by number and integer schemas.
///
/// The two variants have an identical exclusive-keyword set; without a
/// `type` they are indistinguishable by keyword alone, which is why the
/// classifier's inference order carries a fixed Number-before-Integer
/// tie-break.
pub const NUMERIC_KEYWORDS: &[&str] = &[
    "exclusiveMaximum",
    "exclusiveMinimum",
    "maximum",
    "minimum",
    "multipleOf",
];

/// Validation and applicator keywords exclusive to array schemas.
pub const ARRAY_KEYWORDS: &[&str] = &[
    "contains",
    "items",
    "maxContains",
    "maxItems",
    "minContains",
    "minItems",
    "prefixItems",
    "uniqueItems",
];

/// Validation and applicator keywords exclusive to object schemas.
pub const OBJECT_KEYWORDS: &[&str] = &[
    "additionalProperties",
    "dependentRequired",
    "maxProperties",
    "minProperties",
    "patternProperties",
    "properties",
    "propertyNames",
    "required",
];

/// Keywords whose value is a single subschema.
pub const SINGLE_SUBSCHEMA_KEYWORDS: &[&str] = &[
    "additionalProperties",
    "contains",
    "else",
    "if",
    "items",
    "not",
    "propertyNames",
    "then",
    "unevaluatedItems",
    "unevaluatedProperties",
];

/// Keywords whose value is an array of subschemas.
pub const LIST_SUBSCHEMA_KEYWORDS: &[&str] = &["allOf", "anyOf", "oneOf", "prefixItems"];

/// Keywords whose value is an object mapping names to subschemas.
pub const MAP_SUBSCHEMA_KEYWORDS: &[&str] = &[
    "$defs",
    "dependentSchemas",
    "patternProperties",
    "properties",
];

/// The keywords whose presence implies `variant` when `type` is absent.
///
/// Empty for `Null`, `Boolean`, `Any`, and `Reference`: the first two
/// carry nothing beyond the core vocabulary, `Any` is the fallback, and
/// `Reference` is recognized structurally by `$ref`, not by vocabulary.
pub fn exclusive_keywords(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::String => STRING_KEYWORDS,
        Variant::Number | Variant::Integer => NUMERIC_KEYWORDS,
        Variant::Array => ARRAY_KEYWORDS,
        Variant::Object => OBJECT_KEYWORDS,
        Variant::Null | Variant::Boolean | Variant::Any | Variant::Reference => &[],
    }
}

/// The variants whose presence a type-specific keyword implies.
///
/// The inverse of [`exclusive_keywords`]. Numeric keywords imply both
/// `Number` and `Integer`; annotation, composition, identifier,
/// conditional, format, and unevaluated keywords imply nothing.
pub fn variants_implied_by(keyword: &str) -> &'static [Variant] {
    if STRING_KEYWORDS.contains(&keyword) {
        &[Variant::String]
    } else if NUMERIC_KEYWORDS.contains(&keyword) {
        &[Variant::Number, Variant::Integer]
    } else if ARRAY_KEYWORDS.contains(&keyword) {
        &[Variant::Array]
    } else if OBJECT_KEYWORDS.contains(&keyword) {
        &[Variant::Object]
    } else {
        &[]
    }
}
