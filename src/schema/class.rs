//! Class-shaped metadata derived for code-generation templates.

use serde::{Deserialize, Serialize};

use super::types::TypeDescriptor;

/// A class-shaped view of a table, consumed by codegen templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Pascal-cased class name from the normalized table name.
    pub name: String,
    pub fields: Vec<ClassField>,
    pub relations: Vec<ClassRelation>,
}

/// A field of a derived class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassField {
    /// Raw column name, kept for traceability.
    pub original: String,
    /// Camel-cased field identifier.
    pub name: String,
    /// Type descriptor of the backing column.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<TypeDescriptor>,
    /// Pascal-cased class of the referenced table, when the column resolved
    /// as a foreign key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_class: Option<String>,
}

/// A relation accessor of a derived class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRelation {
    /// Un-cased token (pluralized for one-to-many), for templates that need
    /// the raw name.
    pub original: String,
    /// Camel-cased accessor identifier, pluralized for one-to-many.
    pub name: String,
    /// Pascal-cased class at the other end of the relation.
    pub related_class: String,
    /// True for one-to-many accessors (collection-valued).
    pub is_array: bool,
    /// The foreign-key column the relation originates from.
    pub related_key: String,
}
