//! # Modelgen
//!
//! Infers a navigable object/relational model from a database's structural
//! metadata using naming conventions alone; no foreign-key constraints are
//! read from the database.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              SchemaProvider (async seam)                 │
//! │        (table names + describe-style column rows)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [loader: type parsing]
//! ┌─────────────────────────────────────────────────────────┐
//! │              TableDefinition collection                  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [relation inference]
//! ┌─────────────────────────────────────────────────────────┐
//! │    Tables + bidirectional RelationEdges (N:1 / 1:N)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [class derivation]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Tables + ClassDefinitions (for codegen templates)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The inference pass walks every column of every table, treats `_id`-suffixed
//! and override-mapped columns as relation candidates, and resolves them
//! against the full table set. Class derivation then produces code-identifier
//! shaped names (pascal-cased classes, camel-cased fields, pluralized
//! one-to-many accessors) for template consumers.
//!
//! Both passes are pure transformations: they consume a table collection and
//! return a new annotated one, so callers thread the result explicitly from
//! one pass to the next.

pub mod classgen;
pub mod error;
pub mod inference;
pub mod naming;
pub mod provider;
pub mod schema;

pub use classgen::derive_classes;
pub use error::{SchemaError, SchemaResult};
pub use inference::{infer_relations, OverrideResolver, OverrideTarget};
pub use naming::NamingRules;
pub use provider::{sort_by_relation_count, ColumnRow, SchemaLoader, SchemaProvider};
pub use schema::{
    ClassDefinition, ClassField, ClassRelation, ColumnDefinition, DefaultValue, RelationEdge,
    TableDefinition, TypeDescriptor, TypeQualifier,
};
