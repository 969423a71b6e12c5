//! Override resolution for columns the naming heuristic gets wrong.
//!
//! A fixed mapping from column name to target table. Entries are either a
//! literal table name or a resolver function of `(column, owning table)`,
//! used for self-referencing columns like a `parent` pointer which must
//! resolve to the owning table rather than a fixed name.
//!
//! The resolver is an injected strategy object: [`OverrideResolver::conventions`]
//! carries the documented rule set, and callers can extend or replace it per
//! schema dialect without touching the inference engine.

use std::collections::HashMap;

/// Target of an override entry.
#[derive(Debug, Clone)]
pub enum OverrideTarget {
    /// Fixed target table name.
    Table(String),
    /// Dynamic target computed from `(column name, owning table name)`.
    Resolver(fn(&str, &str) -> String),
}

/// Column-name → target-table override mapping.
#[derive(Debug, Clone, Default)]
pub struct OverrideResolver {
    entries: HashMap<String, OverrideTarget>,
}

fn owning_table(_column: &str, table: &str) -> String {
    table.to_string()
}

impl OverrideResolver {
    /// An empty resolver: every lookup falls back to the naming heuristic.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The documented override conventions.
    ///
    /// Audit columns (creator/updater/approver references) resolve to the
    /// canonical `ms_user` table even though they carry no `_id` suffix;
    /// workflow pointers resolve to their well-known tables; `parent` and
    /// `parent_id` are self-references resolving to the owning table.
    pub fn conventions() -> Self {
        let mut resolver = Self::default();

        for column in [
            "create_by",
            "created_by",
            "update_by",
            "updated_by",
            "approve_by",
            "approved_by",
            "reject_by",
            "rejected_by",
            "revised_by",
            "revised_by_id",
        ] {
            resolver.map_table(column, "ms_user");
        }

        for column in [
            "next_workflow_stage",
            "prev_workflow_stage",
            "reject_workflow_stage",
            "reference_workflow_stage",
            "reference_workflow_stage_id",
            "revised_workflow_stage",
            "revised_workflow_stage_id",
        ] {
            resolver.map_table(column, "ms_workflow_stage");
        }

        resolver.map_table("previous_workflow_data", "app_workflow_data");
        resolver.map_table("previous_workflow_data_id", "app_workflow_data");
        resolver.map_table("next_question", "ms_question");
        resolver.map_table("next_question_id", "ms_question");

        resolver.map_resolver("parent", owning_table);
        resolver.map_resolver("parent_id", owning_table);

        resolver
    }

    /// Add a literal column → table entry.
    pub fn map_table(&mut self, column: impl Into<String>, table: impl Into<String>) -> &mut Self {
        self.entries
            .insert(column.into(), OverrideTarget::Table(table.into()));
        self
    }

    /// Add a function-valued entry.
    pub fn map_resolver(
        &mut self,
        column: impl Into<String>,
        resolver: fn(&str, &str) -> String,
    ) -> &mut Self {
        self.entries
            .insert(column.into(), OverrideTarget::Resolver(resolver));
        self
    }

    /// Resolve a column to its override target table, if any.
    ///
    /// `None` signals the caller should fall back to suffix-based
    /// normalization.
    pub fn resolve(&self, column: &str, owning_table: &str) -> Option<String> {
        match self.entries.get(column)? {
            OverrideTarget::Table(table) => Some(table.clone()),
            OverrideTarget::Resolver(resolver) => Some(resolver(column, owning_table)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_entry() {
        let resolver = OverrideResolver::conventions();
        assert_eq!(
            resolver.resolve("created_by", "order"),
            Some("ms_user".to_string())
        );
        assert_eq!(
            resolver.resolve("next_workflow_stage", "app_workflow_data"),
            Some("ms_workflow_stage".to_string())
        );
    }

    #[test]
    fn test_self_reference_resolves_to_owning_table() {
        let resolver = OverrideResolver::conventions();
        assert_eq!(
            resolver.resolve("parent_id", "category"),
            Some("category".to_string())
        );
        assert_eq!(
            resolver.resolve("parent", "ms_menu"),
            Some("ms_menu".to_string())
        );
    }

    #[test]
    fn test_miss_returns_none() {
        let resolver = OverrideResolver::conventions();
        assert_eq!(resolver.resolve("user_id", "order"), None);
    }

    #[test]
    fn test_custom_entry() {
        let mut resolver = OverrideResolver::empty();
        resolver.map_table("owner_ref", "ms_user");
        assert_eq!(
            resolver.resolve("owner_ref", "order"),
            Some("ms_user".to_string())
        );
        assert_eq!(resolver.resolve("created_by", "order"), None);
    }
}
