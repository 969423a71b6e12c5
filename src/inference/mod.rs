//! Relation inference from naming conventions.
//!
//! The engine walks every column of every table, treats override-mapped and
//! `_id`-suffixed columns as relation candidates, resolves them against the
//! full table set, and attaches bidirectional relation edges. Overrides are
//! consulted with the raw column name before the suffix check, so audit
//! columns like `created_by` participate even without an `_id` suffix.

mod engine;
mod overrides;

pub use engine::infer_relations;
pub use overrides::{OverrideResolver, OverrideTarget};
