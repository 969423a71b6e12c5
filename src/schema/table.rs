//! Table definitions.

use serde::{Deserialize, Serialize};

use super::class::ClassDefinition;
use super::column::ColumnDefinition;
use super::relation::RelationEdge;

/// A table with its columns, inferred relations, and derived class metadata.
///
/// `relations` starts empty and is populated exclusively by the inference
/// pass; `class` is populated exclusively by the class derivation pass and is
/// absent until that pass runs. Table names are unique within a load; the
/// upstream lister guarantees this, it is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub fields: Vec<ColumnDefinition>,
    #[serde(default)]
    pub relations: Vec<RelationEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassDefinition>,
}

impl TableDefinition {
    /// Create a table with no relations or class metadata yet.
    pub fn new(name: impl Into<String>, fields: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
            relations: Vec::new(),
            class: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_starts_unannotated() {
        let table = TableDefinition::new(
            "order",
            vec![ColumnDefinition::from_parts(
                "id",
                Some("int(11)"),
                true,
                None,
            )],
        );
        assert_eq!(table.name, "order");
        assert_eq!(table.fields.len(), 1);
        assert!(table.relations.is_empty());
        assert!(table.class.is_none());
    }

    #[test]
    fn test_deserialize_without_relations() {
        let table: TableDefinition = serde_json::from_str(
            r#"{"name": "order", "fields": []}"#,
        )
        .unwrap();
        assert!(table.relations.is_empty());
    }
}
