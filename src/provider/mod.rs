//! Metadata provider seam and schema loader.
//!
//! Database connectivity lives behind [`SchemaProvider`]: implementations
//! hand the core a table list and describe-style column rows, and own every
//! connection and query failure. The [`SchemaLoader`] orchestrates a reload
//! (fetch, build, infer, derive) and returns the fully annotated table set.
//!
//! ```ignore
//! use modelgen::{SchemaLoader, SchemaProvider};
//!
//! async fn example(provider: impl SchemaProvider) -> modelgen::SchemaResult<()> {
//!     let loader = SchemaLoader::new(provider);
//!     let tables = loader.reload().await?;
//!     let json = serde_json::to_string_pretty(&tables);
//!     Ok(())
//! }
//! ```

mod loader;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SchemaResult;

pub use loader::{sort_by_relation_count, SchemaLoader};

/// A raw column row, as reported by a `describe`-style query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRow {
    /// Column name.
    pub name: String,
    /// Raw type string in the source dialect's syntax, e.g. `varchar(255)`.
    pub column_type: Option<String>,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Default value as reported by the database (always text).
    pub default_value: Option<String>,
}

/// Source of raw schema metadata.
///
/// Implementations wrap a concrete database connection. All I/O failures are
/// theirs to surface as [`crate::SchemaError`]; the core never retries or
/// catches on their behalf.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// List every table name in the schema (views excluded).
    async fn list_tables(&self) -> SchemaResult<Vec<String>>;

    /// Fetch the ordered column rows of a table.
    async fn describe_table(&self, table: &str) -> SchemaResult<Vec<ColumnRow>>;
}
