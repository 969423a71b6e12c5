//! Column definitions.

use serde::{Deserialize, Serialize};

use super::types::TypeDescriptor;

/// Default value of a column.
///
/// Numeric-looking defaults from the database (which reports everything as
/// text) are coerced to integers; everything else stays a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Integer(i64),
    Text(String),
}

impl DefaultValue {
    /// Coerce a raw default string, preferring an integer reading.
    pub fn coerce(raw: &str) -> DefaultValue {
        match raw.parse::<i64>() {
            Ok(n) => DefaultValue::Integer(n),
            Err(_) => DefaultValue::Text(raw.to_string()),
        }
    }
}

/// A single column of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Raw column name as reported by the database.
    pub name: String,
    /// Parsed type descriptor; absent when the provider reported no type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<TypeDescriptor>,
    /// Whether the column is NOT NULL.
    pub required: bool,
    /// Default value, coerced to an integer when numeric-looking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    /// Target table name, set only when the inference pass resolves this
    /// column as a foreign key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_table: Option<String>,
}

impl ColumnDefinition {
    /// Build a column from the raw parts of a describe-style row.
    pub fn from_parts(
        name: impl Into<String>,
        raw_type: Option<&str>,
        required: bool,
        default_value: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: TypeDescriptor::parse(raw_type),
            required,
            default_value: default_value.map(DefaultValue::coerce),
            related_table: None,
        }
    }
}
