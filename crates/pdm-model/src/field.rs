//! The closed set of standard person fields.
//!
//! Every source column is either mapped to one of these fields or ignored.
//! The set and its labels are static configuration and never change at
//! runtime.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A standard field a source column can be mapped to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StandardField {
    Name,
    Company,
    Phone,
    Email,
}

impl StandardField {
    /// All standard fields, in display order.
    pub const ALL: [StandardField; 4] = [
        StandardField::Name,
        StandardField::Company,
        StandardField::Phone,
        StandardField::Email,
    ];

    /// Returns the identifier used in mappings and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardField::Name => "name",
            StandardField::Company => "company",
            StandardField::Phone => "phone",
            StandardField::Email => "email",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StandardField::Name => "Name",
            StandardField::Company => "Company",
            StandardField::Phone => "Phone",
            StandardField::Email => "Email",
        }
    }

    /// Returns the `{id -> label}` table handed to the mapping step.
    pub fn catalog() -> BTreeMap<StandardField, String> {
        Self::ALL
            .iter()
            .map(|field| (*field, field.label().to_string()))
            .collect()
    }
}

impl fmt::Display for StandardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StandardField {
    type Err = ModelError;

    /// Parses a field identifier or label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "name" => Ok(StandardField::Name),
            "company" => Ok(StandardField::Company),
            "phone" => Ok(StandardField::Phone),
            "email" => Ok(StandardField::Email),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}
