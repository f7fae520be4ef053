//! Person records and their session-scoped identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::StandardField;

/// Identifier assigned to a record when it is created.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of record ids.
///
/// Ids start at 1 and are never reused for the lifetime of the sequence.
#[derive(Debug, Clone, Default)]
pub struct RecordIdSequence {
    last: u64,
}

impl RecordIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next id.
    pub fn next_id(&mut self) -> RecordId {
        self.last += 1;
        RecordId(self.last)
    }

    /// The most recently allocated id, if any.
    pub fn last(&self) -> Option<RecordId> {
        (self.last > 0).then_some(RecordId(self.last))
    }
}

/// One parsed person entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Record {
    /// Creates a record with no fields set.
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            name: None,
            company: None,
            phone: None,
            email: None,
        }
    }

    /// Returns the value stored for `field`.
    pub fn get(&self, field: StandardField) -> Option<&str> {
        match field {
            StandardField::Name => self.name.as_deref(),
            StandardField::Company => self.company.as_deref(),
            StandardField::Phone => self.phone.as_deref(),
            StandardField::Email => self.email.as_deref(),
        }
    }

    /// Overwrites `field` with `value`; an empty value clears the field.
    pub fn set(&mut self, field: StandardField, value: &str) {
        let value = (!value.is_empty()).then(|| value.to_string());
        match field {
            StandardField::Name => self.name = value,
            StandardField::Company => self.company = value,
            StandardField::Phone => self.phone = value,
            StandardField::Email => self.email = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increases() {
        let mut ids = RecordIdSequence::new();
        assert_eq!(ids.last(), None);
        assert_eq!(ids.next_id(), RecordId::new(1));
        assert_eq!(ids.next_id(), RecordId::new(2));
        assert_eq!(ids.last(), Some(RecordId::new(2)));
    }

    #[test]
    fn empty_value_clears_field() {
        let mut record = Record::new(RecordId::new(1));
        record.set(StandardField::Email, "a@x.com");
        assert_eq!(record.get(StandardField::Email), Some("a@x.com"));
        record.set(StandardField::Email, "");
        assert_eq!(record.get(StandardField::Email), None);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let mut record = Record::new(RecordId::new(1));
        record.set(StandardField::Name, "John Doe");
        insta::assert_json_snapshot!(record, @r#"
        {
          "id": 1,
          "name": "John Doe"
        }
        "#);
    }
}
