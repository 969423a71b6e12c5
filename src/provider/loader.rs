//! Reload orchestration.

use crate::classgen::derive_classes;
use crate::error::SchemaResult;
use crate::inference::{infer_relations, OverrideResolver};
use crate::naming::NamingRules;
use crate::schema::{ColumnDefinition, TableDefinition};

use super::SchemaProvider;

/// Loads a schema through a provider and runs the annotation passes.
///
/// A reload rebuilds everything from the freshly fetched rows; nothing
/// survives from the previous table graph.
pub struct SchemaLoader<P> {
    provider: P,
    overrides: OverrideResolver,
    rules: NamingRules,
}

impl<P: SchemaProvider> SchemaLoader<P> {
    /// Create a loader with the documented override and naming conventions.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            overrides: OverrideResolver::conventions(),
            rules: NamingRules::default(),
        }
    }

    /// Replace the override mapping.
    pub fn with_overrides(mut self, overrides: OverrideResolver) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replace the naming rule set.
    pub fn with_rules(mut self, rules: NamingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Reload the full table set: list tables, describe them concurrently,
    /// then run relation inference and class derivation in order.
    pub async fn reload(&self) -> SchemaResult<Vec<TableDefinition>> {
        let names = self.provider.list_tables().await?;

        let fetches: Vec<_> = names.iter().map(|name| self.load_table(name)).collect();
        let tables: Vec<TableDefinition> = futures::future::join_all(fetches)
            .await
            .into_iter()
            .collect::<SchemaResult<_>>()?;

        let tables = infer_relations(tables, &self.overrides, &self.rules);
        Ok(derive_classes(tables, &self.rules))
    }

    async fn load_table(&self, name: &str) -> SchemaResult<TableDefinition> {
        let rows = self.provider.describe_table(name).await?;
        let fields = rows
            .into_iter()
            .map(|row| {
                ColumnDefinition::from_parts(
                    row.name,
                    row.column_type.as_deref(),
                    !row.nullable,
                    row.default_value.as_deref(),
                )
            })
            .collect();
        Ok(TableDefinition::new(name, fields))
    }
}

/// Order tables by ascending relation count, the order the export path
/// writes them in.
pub fn sort_by_relation_count(tables: &mut [TableDefinition]) {
    tables.sort_by_key(|table| table.relations.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_relation_count() {
        let mut busy = TableDefinition::new("user", Vec::new());
        busy.relations = vec![
            crate::schema::RelationEdge::OneToMany {
                name: "order".to_string(),
                table: "order".to_string(),
                external_key: "user_id".to_string(),
            },
        ];
        let quiet = TableDefinition::new("audit_log", Vec::new());

        let mut tables = vec![busy, quiet];
        sort_by_relation_count(&mut tables);
        assert_eq!(tables[0].name, "audit_log");
        assert_eq!(tables[1].name, "user");
    }
}
