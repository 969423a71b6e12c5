//! The relation inference pass.

use std::collections::HashMap;

use crate::naming::NamingRules;
use crate::schema::{RelationEdge, TableDefinition};

use super::overrides::OverrideResolver;

/// Infer relations across a complete table set.
///
/// Consumes the tables and returns the same collection with `related_table`
/// markers and bidirectional relation edges attached. The pass must run over
/// the full table set, since resolution depends on the complete table index
/// being stable. It is idempotent: re-running it over an already-annotated
/// set adds nothing.
///
/// For each column, a candidate target name is computed from the override
/// mapping (consulted with the raw column name, so override-mapped columns
/// without an `_id` suffix still participate) or, failing that, by stripping
/// the `_id` suffix from a foreign-key-shaped name. A candidate that matches
/// no table produces no edge; that is expected for ordinary external
/// reference ids and is not an error.
pub fn infer_relations(
    mut tables: Vec<TableDefinition>,
    overrides: &OverrideResolver,
    rules: &NamingRules,
) -> Vec<TableDefinition> {
    // Per-pass name index, discarded when the pass ends. Misses are never
    // inserted, so no negative result survives to a later lookup.
    let index: HashMap<String, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.clone(), i))
        .collect();

    for owner in 0..tables.len() {
        let owner_name = tables[owner].name.clone();

        for col in 0..tables[owner].fields.len() {
            let column_name = tables[owner].fields[col].name.clone();

            let candidate = match overrides.resolve(&column_name, &owner_name) {
                Some(target) => target,
                None => {
                    if !rules.is_column_id(&column_name) {
                        continue;
                    }
                    rules.strip_id_suffix(&column_name)
                }
            };

            let Some(&target) = index.get(&candidate) else {
                continue;
            };
            let target_name = tables[target].name.clone();

            tables[owner].fields[col].related_table = Some(target_name.clone());

            let forward = RelationEdge::ManyToOne {
                name: rules.normalize(&column_name),
                table: target_name,
                foreign_key: column_name.clone(),
            };
            push_unique(&mut tables[owner].relations, forward);

            // Normalization is idempotent, but applying it twice also strips
            // a leftover `_id`-shaped suffix when the table name itself ends
            // in one.
            let reciprocal = RelationEdge::OneToMany {
                name: rules.normalize(&rules.normalize(&owner_name)),
                table: owner_name.clone(),
                external_key: column_name,
            };
            push_unique(&mut tables[target].relations, reciprocal);
        }
    }

    tables
}

/// Append an edge unless an equivalent one (same direction, name, and
/// originating column) is already present.
fn push_unique(relations: &mut Vec<RelationEdge>, edge: RelationEdge) {
    if !relations.iter().any(|existing| existing.duplicates(&edge)) {
        relations.push(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDefinition;

    fn table(name: &str, columns: &[&str]) -> TableDefinition {
        TableDefinition::new(
            name,
            columns
                .iter()
                .map(|c| ColumnDefinition::from_parts(*c, Some("int(11)"), true, None))
                .collect(),
        )
    }

    fn infer(tables: Vec<TableDefinition>) -> Vec<TableDefinition> {
        infer_relations(
            tables,
            &OverrideResolver::conventions(),
            &NamingRules::default(),
        )
    }

    fn find<'a>(tables: &'a [TableDefinition], name: &str) -> &'a TableDefinition {
        tables.iter().find(|t| t.name == name).unwrap()
    }

    #[test]
    fn test_forward_and_reciprocal_edges() {
        let tables = infer(vec![
            table("user", &["id", "name"]),
            table("order", &["id", "user_id", "total"]),
        ]);

        let order = find(&tables, "order");
        assert_eq!(
            order.relations,
            vec![RelationEdge::ManyToOne {
                name: "user".to_string(),
                table: "user".to_string(),
                foreign_key: "user_id".to_string(),
            }]
        );
        assert_eq!(
            order.fields[1].related_table,
            Some("user".to_string())
        );

        let user = find(&tables, "user");
        assert_eq!(
            user.relations,
            vec![RelationEdge::OneToMany {
                name: "order".to_string(),
                table: "order".to_string(),
                external_key: "user_id".to_string(),
            }]
        );
    }

    #[test]
    fn test_idempotent_across_passes() {
        let once = infer(vec![
            table("user", &["id"]),
            table("order", &["id", "user_id"]),
        ]);
        let twice = infer(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_unresolvable_candidate_is_silent() {
        let tables = infer(vec![table("order", &["id", "external_ref_id"])]);

        let order = find(&tables, "order");
        assert!(order.relations.is_empty());
        assert_eq!(order.fields[1].related_table, None);
    }

    #[test]
    fn test_override_participates_without_id_suffix() {
        let tables = infer(vec![
            table("ms_user", &["id"]),
            table("order", &["id", "created_by"]),
        ]);

        let order = find(&tables, "order");
        assert_eq!(order.fields[1].related_table, Some("ms_user".to_string()));
        assert_eq!(
            order.relations,
            vec![RelationEdge::ManyToOne {
                name: "created_by".to_string(),
                table: "ms_user".to_string(),
                foreign_key: "created_by".to_string(),
            }]
        );

        let user = find(&tables, "ms_user");
        assert_eq!(
            user.relations,
            vec![RelationEdge::OneToMany {
                name: "order".to_string(),
                table: "order".to_string(),
                external_key: "created_by".to_string(),
            }]
        );
    }

    #[test]
    fn test_self_reference_lands_both_edges_on_owner() {
        let tables = infer(vec![table("category", &["id", "parent_id"])]);

        let category = find(&tables, "category");
        assert_eq!(category.fields[1].related_table, Some("category".to_string()));
        assert_eq!(category.relations.len(), 2);
        assert!(category.relations.contains(&RelationEdge::ManyToOne {
            name: "parent".to_string(),
            table: "category".to_string(),
            foreign_key: "parent_id".to_string(),
        }));
        assert!(category.relations.contains(&RelationEdge::OneToMany {
            name: "category".to_string(),
            table: "category".to_string(),
            external_key: "parent_id".to_string(),
        }));
    }

    #[test]
    fn test_reciprocal_name_double_normalized() {
        // The owning table carries a module prefix; one normalization strips
        // it and the second pass has nothing left to remove.
        let tables = infer(vec![
            table("ms_user", &["id"]),
            table("app_workflow_data", &["id", "created_by"]),
        ]);

        let user = find(&tables, "ms_user");
        assert_eq!(user.relations[0].name(), "workflow_data");
    }

    #[test]
    fn test_two_tables_referencing_same_target() {
        let tables = infer(vec![
            table("user", &["id"]),
            table("order", &["id", "user_id"]),
            table("invoice", &["id", "user_id"]),
        ]);

        let user = find(&tables, "user");
        // Distinct reciprocal names, so both survive dedup.
        assert_eq!(user.relations.len(), 2);
    }

    #[test]
    fn test_empty_resolver_skips_audit_columns() {
        let tables = infer_relations(
            vec![
                table("ms_user", &["id"]),
                table("order", &["id", "created_by"]),
            ],
            &OverrideResolver::empty(),
            &NamingRules::default(),
        );

        let order = find(&tables, "order");
        assert!(order.relations.is_empty());
        assert_eq!(order.fields[1].related_table, None);
    }
}
