//! # jsv-model: Schema Model for JSON Schema Draft 2020-12
//!
//! This crate is the bedrock of the workspace. It defines the closed
//! set of variant tags a schema node can classify into, the keyword
//! vocabulary each variant may legally carry, borrowed structural views
//! over parsed nodes, and the typed per-variant payload shapes.
//! `jsv-classify` depends on it; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One vocabulary table.** The keyword → variant mapping lives in
//!    [`vocabulary`] and nowhere else. The classifier and every
//!    narrowing predicate read the same table, so they cannot disagree
//!    on which keywords imply which variant.
//!
//! 2. **Structural before semantic.** [`SchemaNode`] names a node's
//!    shape (boolean literal, object, invalid) before any keyword is
//!    read. The literal `true`/`false` schema and the object schema
//!    declaring `type: "boolean"` are different things and stay
//!    different by construction.
//!
//! 3. **Read-only borrowing.** Nodes are produced by an external
//!    parser and never mutated here. Views borrow; narrowed payloads
//!    copy only the keywords they expose.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsv-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; owned payload types
//!   also implement `Serialize`.

pub mod dialect;
pub mod node;
pub mod typed;
pub mod variant;
pub mod vocabulary;

// Re-export primary types for ergonomic imports.
pub use dialect::{PrimitiveType, UnknownPrimitiveType, DIALECT_IDENTIFIER, PRIMITIVE_TYPE_COUNT};
pub use node::SchemaNode;
pub use typed::{
    Annotations, AnySchema, ArraySchema, BooleanSchema, CommonKeywords, NullSchema, NumericSchema,
    ObjectSchema, ReferenceSchema, StringSchema, TypedSchema,
};
pub use variant::{Variant, VARIANT_COUNT};
