//! Class metadata derivation for codegen templates.
//!
//! Runs after relation inference and turns each table into a class-shaped
//! structure: pascal-cased class name, camel-cased field names, and relation
//! accessors (pluralized for one-to-many). Templates bind these structures
//! directly, so every original token is carried alongside its cased form.

use inflector::Inflector;

use crate::naming::{inflect::pluralize, NamingRules};
use crate::schema::{ClassDefinition, ClassField, ClassRelation, TableDefinition};

/// Derive class metadata for every table.
///
/// Consumes the relation-annotated table set and returns it with `class`
/// populated. Relation accessors are deduplicated by final accessor name
/// within a class; when two edges normalize to the same accessor, the first
/// wins.
pub fn derive_classes(mut tables: Vec<TableDefinition>, rules: &NamingRules) -> Vec<TableDefinition> {
    for table in &mut tables {
        let name = rules.normalize(&table.name).to_pascal_case();

        let fields = table
            .fields
            .iter()
            .map(|column| ClassField {
                original: column.name.clone(),
                // Field names keep their key suffixes; only the digit token
                // is rewritten before casing.
                name: rules.rewrite_digit_suffix(&column.name).to_camel_case(),
                data_type: column.data_type.clone(),
                related_class: column
                    .related_table
                    .as_deref()
                    .map(|t| rules.normalize(t).to_pascal_case()),
            })
            .collect();

        let mut relations: Vec<ClassRelation> = Vec::new();
        for edge in &table.relations {
            let token = if edge.is_array() {
                pluralize(edge.name())
            } else {
                edge.name().to_string()
            };
            let accessor = token.to_camel_case();
            if relations.iter().any(|r| r.name == accessor) {
                continue;
            }
            relations.push(ClassRelation {
                original: token,
                name: accessor,
                related_class: rules.normalize(edge.table()).to_pascal_case(),
                is_array: edge.is_array(),
                related_key: edge.key().to_string(),
            });
        }

        table.class = Some(ClassDefinition {
            name,
            fields,
            relations,
        });
    }

    tables
}
