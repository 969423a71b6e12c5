//! Error types for the provider seam.
//!
//! The core passes (type parsing, normalization, inference, class derivation)
//! never fail: malformed type strings degrade to partial descriptors and
//! unresolved relation candidates simply produce no edge. Errors only arise
//! from the external metadata provider, and the loader surfaces them unchanged
//! without retrying.

use thiserror::Error;

/// Result type for schema loading operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors surfaced by schema providers.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Could not establish a connection to the database.
    #[error("database connection failed: {0}")]
    ConnectionFailed(String),

    /// A metadata query failed for a specific table.
    #[error("failed to describe table {table}: {message}")]
    QueryFailed {
        /// Table the describe call was issued for.
        table: String,
        /// Driver-reported failure message.
        message: String,
    },

    /// Any other provider-side failure.
    #[error("provider error: {0}")]
    Provider(String),
}

impl SchemaError {
    /// Create a query failure for a table.
    pub fn query_failed(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueryFailed {
            table: table.into(),
            message: message.into(),
        }
    }
}
