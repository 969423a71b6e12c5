//! Relation edges between tables.
//!
//! Inference attaches a forward `many_to_one` edge to the referencing table
//! and a reciprocal `one_to_many` edge to the referenced table. For every
//! forward edge on table A referencing table B via column `c` there is
//! exactly one reciprocal edge on B with `external_key = c`; the engine
//! enforces this at insertion time.

use serde::{Deserialize, Serialize};

/// A directed relation edge attached to a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelationEdge {
    /// Forward edge on the owning table: this table holds the foreign key.
    ManyToOne {
        /// Normalized relation name (from the column name).
        name: String,
        /// Target table name.
        table: String,
        /// The foreign-key column on the owning table.
        foreign_key: String,
    },
    /// Reciprocal edge on the referenced table.
    OneToMany {
        /// Normalized relation name (from the referencing table name).
        name: String,
        /// Referencing table name.
        table: String,
        /// The originating column on the referencing table.
        external_key: String,
    },
}

impl RelationEdge {
    /// Normalized relation name.
    pub fn name(&self) -> &str {
        match self {
            Self::ManyToOne { name, .. } | Self::OneToMany { name, .. } => name,
        }
    }

    /// The table at the other end of the edge.
    pub fn table(&self) -> &str {
        match self {
            Self::ManyToOne { table, .. } | Self::OneToMany { table, .. } => table,
        }
    }

    /// The column the relation originates from.
    pub fn key(&self) -> &str {
        match self {
            Self::ManyToOne { foreign_key, .. } => foreign_key,
            Self::OneToMany { external_key, .. } => external_key,
        }
    }

    /// True for the collection side (`one_to_many`).
    pub fn is_array(&self) -> bool {
        matches!(self, Self::OneToMany { .. })
    }

    /// Whether two edges describe the same relation: same direction, same
    /// normalized name, and the same originating column.
    pub fn duplicates(&self, other: &RelationEdge) -> bool {
        self.is_array() == other.is_array()
            && self.name() == other.name()
            && self.key() == other.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_edge_serialization_shape() {
        let edge = RelationEdge::ManyToOne {
            name: "user".to_string(),
            table: "user".to_string(),
            foreign_key: "user_id".to_string(),
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["type"], "many_to_one");
        assert_eq!(json["foreign_key"], "user_id");
        assert!(json.get("external_key").is_none());
    }

    #[test]
    fn test_reciprocal_edge_round_trip() {
        let edge = RelationEdge::OneToMany {
            name: "order".to_string(),
            table: "order".to_string(),
            external_key: "user_id".to_string(),
        };
        let json = serde_json::to_string(&edge).unwrap();
        let back: RelationEdge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }

    #[test]
    fn test_duplicates_ignores_direction_mismatch() {
        let forward = RelationEdge::ManyToOne {
            name: "user".to_string(),
            table: "user".to_string(),
            foreign_key: "user_id".to_string(),
        };
        let reciprocal = RelationEdge::OneToMany {
            name: "user".to_string(),
            table: "order".to_string(),
            external_key: "user_id".to_string(),
        };
        assert!(!forward.duplicates(&reciprocal));
        assert!(forward.duplicates(&forward.clone()));
    }
}
