//! # jsv-classify: Variant Classification for 2020-12 Schema Nodes
//!
//! Given an already-parsed schema node (a `serde_json::Value`), this
//! crate decides which of the nine variants from `jsv-model` the node
//! represents, and optionally projects the node into that variant's
//! narrowed keyword view.
//!
//! ## Surfaces
//!
//! - [`classify`]: the total decision procedure. Every JSON value
//!   maps to exactly one [`jsv_model::Variant`]; malformed input
//!   degrades, it never fails.
//! - [`classify_strict`]: same procedure, but malformed `type` values
//!   are reported as [`MalformedTypeError`] instead of degraded past.
//!   Opt-in; the default path never aborts a classification pass.
//! - [`predicates`]: independent per-variant narrowing tests, not
//!   mutually exclusive, for callers that want "could this be an X"
//!   rather than a single tag.
//! - [`narrow`]: classify plus the typed per-variant view.
//!
//! ## Crate Policy
//!
//! - Pure functions over borrowed nodes; no I/O, no shared state, safe
//!   to call concurrently without synchronization.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Ambiguity (a multi-type `type` array) is resolved by a fixed,
//!   documented priority order and surfaced through `tracing`, never
//!   through an error.

pub mod classify;
pub mod error;
pub mod narrow;
pub mod predicates;

pub use classify::{classify, classify_strict};
pub use error::MalformedTypeError;
pub use narrow::narrow;
pub use predicates::{
    is_any_schema, is_array_schema, is_boolean_schema, is_integer_schema, is_null_schema,
    is_number_schema, is_object_schema, is_reference, is_string_schema,
};
