//! Column-to-field mapping types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{ModelError, Result, StandardField};

/// Partial association from source column header to standard field.
///
/// Headers missing from the map are ignored when records are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: BTreeMap<String, StandardField>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `header` to `field`, replacing any previous assignment.
    pub fn assign(&mut self, header: impl Into<String>, field: StandardField) {
        self.entries.insert(header.into(), field);
    }

    /// Removes the assignment for `header`, returning the previous field.
    pub fn ignore(&mut self, header: &str) -> Option<StandardField> {
        self.entries.remove(header)
    }

    pub fn get(&self, header: &str) -> Option<StandardField> {
        self.entries.get(header).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StandardField)> {
        self.entries.iter().map(|(header, field)| (header.as_str(), *field))
    }

    /// Parses a `HEADER=FIELD` entry as given on the command line.
    ///
    /// The split happens on the last `=` so headers may contain `=`.
    pub fn parse_entry(raw: &str) -> Result<(String, StandardField)> {
        let (header, field) = raw
            .rsplit_once('=')
            .ok_or_else(|| ModelError::InvalidMappingEntry(raw.to_string()))?;
        let header = header.trim();
        if header.is_empty() {
            return Err(ModelError::InvalidMappingEntry(raw.to_string()));
        }
        Ok((header.to_string(), field.parse()?))
    }
}

impl FromIterator<(String, StandardField)> for ColumnMapping {
    fn from_iter<I: IntoIterator<Item = (String, StandardField)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A mapping the user confirmed. Always holds at least one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedMapping(ColumnMapping);

impl ConfirmedMapping {
    pub fn new(mapping: ColumnMapping) -> Result<Self> {
        if mapping.is_empty() {
            return Err(ModelError::EmptyMapping);
        }
        Ok(Self(mapping))
    }

    pub fn field_for(&self, header: &str) -> Option<StandardField> {
        self.0.get(header)
    }
}

impl TryFrom<ColumnMapping> for ConfirmedMapping {
    type Error = ModelError;

    fn try_from(mapping: ColumnMapping) -> Result<Self> {
        Self::new(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entry_splits_on_last_equals() {
        let (header, field) = ColumnMapping::parse_entry("a=b=email").unwrap();
        assert_eq!(header, "a=b");
        assert_eq!(field, StandardField::Email);
    }

    #[test]
    fn parse_entry_rejects_missing_parts() {
        assert!(matches!(
            ColumnMapping::parse_entry("Full Name"),
            Err(ModelError::InvalidMappingEntry(_))
        ));
        assert!(matches!(
            ColumnMapping::parse_entry("=name"),
            Err(ModelError::InvalidMappingEntry(_))
        ));
        assert!(matches!(
            ColumnMapping::parse_entry("Full Name=fax"),
            Err(ModelError::UnknownField(_))
        ));
    }

    #[test]
    fn confirmed_mapping_requires_an_assignment() {
        assert_eq!(
            ConfirmedMapping::new(ColumnMapping::new()),
            Err(ModelError::EmptyMapping)
        );

        let mut mapping = ColumnMapping::new();
        mapping.assign("Email Address", StandardField::Email);
        let confirmed = ConfirmedMapping::try_from(mapping).unwrap();
        assert_eq!(
            confirmed.field_for("Email Address"),
            Some(StandardField::Email)
        );
        assert_eq!(confirmed.field_for("Other"), None);
    }

    #[test]
    fn deserializes_from_plain_object() {
        let mapping: ColumnMapping =
            serde_json::from_str(r#"{"Full Name": "name", "Mobile": "phone"}"#).unwrap();
        assert_eq!(mapping.get("Full Name"), Some(StandardField::Name));
        assert_eq!(mapping.get("Mobile"), Some(StandardField::Phone));
    }
}
