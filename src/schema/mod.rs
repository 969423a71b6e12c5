//! Schema data model.
//!
//! The structures produced by a reload: tables with typed columns, the
//! relation edges added by the inference pass, and the class metadata added
//! by the derivation pass. Everything here serializes to a plain nested
//! map/array form so the export path can persist it verbatim and template
//! engines can bind it directly.

mod class;
mod column;
mod relation;
mod table;
pub mod types;

pub use class::{ClassDefinition, ClassField, ClassRelation};
pub use column::{ColumnDefinition, DefaultValue};
pub use relation::RelationEdge;
pub use table::TableDefinition;
pub use types::{TypeDescriptor, TypeQualifier};
