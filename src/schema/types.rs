//! Column type descriptor parsing.
//!
//! Converts a raw `describe`-style type string (e.g. `varchar(255)`,
//! `int(11)`, `enum('a','b')`) into a structured descriptor. Parsing never
//! fails: malformed strings degrade to the best available substring.

use serde::{Deserialize, Serialize};

/// Parenthesized qualifier on a column type.
///
/// Untagged so a plain integer serializes as a number and a non-numeric
/// remainder (an enum value list) round-trips as the raw string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeQualifier {
    /// Plain integer length, e.g. the `255` in `varchar(255)`.
    Length(u32),
    /// Raw remainder kept as a fallback, e.g. `'a','b'` from `enum('a','b')`.
    Values(String),
}

/// Structured descriptor for a raw column type string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Base type token, e.g. `varchar` or `int`.
    #[serde(rename = "type")]
    pub base_type: String,
    /// Length or raw value-list qualifier, absent when the raw string carries
    /// no parenthesized part.
    #[serde(rename = "length", skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<TypeQualifier>,
}

impl TypeDescriptor {
    /// Parse a raw type string into a descriptor.
    ///
    /// Absence propagates: `None` and empty strings return `None` rather than
    /// synthesizing a descriptor. Otherwise the string is split on the first
    /// opening parenthesis (with a boundary space inserted) and whitespace;
    /// the first token becomes the base type and the second, if present, is
    /// stripped of parentheses and kept as a length when purely numeric or as
    /// the raw remainder otherwise.
    pub fn parse(raw: Option<&str>) -> Option<TypeDescriptor> {
        let raw = raw?;
        if raw.is_empty() {
            return None;
        }

        let spaced = raw.replacen('(', " (", 1);
        let mut tokens = spaced.split_whitespace();
        let base_type = tokens.next().unwrap_or_default().to_string();
        let qualifier = tokens.next().map(|token| {
            let inner = token.trim_matches(|c| c == '(' || c == ')');
            match inner.parse::<u32>() {
                Ok(n) => TypeQualifier::Length(n),
                Err(_) => TypeQualifier::Values(inner.to_string()),
            }
        });

        Some(TypeDescriptor {
            base_type,
            qualifier,
        })
    }

    /// The integer length, if the qualifier was a plain number.
    pub fn length(&self) -> Option<u32> {
        match self.qualifier {
            Some(TypeQualifier::Length(n)) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_length() {
        let desc = TypeDescriptor::parse(Some("varchar(255)")).unwrap();
        assert_eq!(desc.base_type, "varchar");
        assert_eq!(desc.length(), Some(255));
    }

    #[test]
    fn test_parse_int_display_width() {
        let desc = TypeDescriptor::parse(Some("int(11)")).unwrap();
        assert_eq!(desc.base_type, "int");
        assert_eq!(desc.length(), Some(11));
    }

    #[test]
    fn test_parse_without_qualifier() {
        let desc = TypeDescriptor::parse(Some("text")).unwrap();
        assert_eq!(desc.base_type, "text");
        assert_eq!(desc.qualifier, None);
    }

    #[test]
    fn test_parse_enum_keeps_raw_values() {
        let desc = TypeDescriptor::parse(Some("enum('a','b')")).unwrap();
        assert_eq!(desc.base_type, "enum");
        assert_eq!(
            desc.qualifier,
            Some(TypeQualifier::Values("'a','b'".to_string()))
        );
        assert_eq!(desc.length(), None);
    }

    #[test]
    fn test_parse_absence_propagates() {
        assert_eq!(TypeDescriptor::parse(None), None);
        assert_eq!(TypeDescriptor::parse(Some("")), None);
    }

    #[test]
    fn test_serialize_length_as_number() {
        let desc = TypeDescriptor::parse(Some("varchar(100)")).unwrap();
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["type"], "varchar");
        assert_eq!(json["length"], 100);
    }

    #[test]
    fn test_serialize_values_as_string() {
        let desc = TypeDescriptor::parse(Some("enum('x','y')")).unwrap();
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["length"], "'x','y'");

        let back: TypeDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, desc);
    }
}
