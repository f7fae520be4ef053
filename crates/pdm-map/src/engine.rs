//! Keyword-based column suggestions.

use std::collections::BTreeSet;

use pdm_model::{ColumnMapping, StandardField};
use serde::{Deserialize, Serialize};

/// Maps headers containing any of `keywords` to `field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRule {
    pub field: StandardField,
    pub keywords: Vec<String>,
}

impl SuggestionRule {
    pub fn new(field: StandardField, keywords: &[&str]) -> Self {
        Self {
            field,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// `lowered` must already be lower-case.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Result of a suggestion pass.
#[derive(Debug, Clone, Default)]
pub struct SuggestionResult {
    /// Suggested header assignments.
    pub mapping: ColumnMapping,
    /// Headers no rule matched, in column order without repeats.
    pub unmapped_columns: Vec<String>,
}

/// Proposes a standard field for each header from its text alone.
///
/// Rules are checked in order and the first match wins, so earlier rules
/// take priority when keyword sets overlap.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rules: Vec<SuggestionRule>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::with_rules(vec![
            SuggestionRule::new(StandardField::Name, &["name", "full"]),
            SuggestionRule::new(StandardField::Company, &["company", "org", "business"]),
            SuggestionRule::new(StandardField::Phone, &["phone", "tel", "mobile"]),
            SuggestionRule::new(StandardField::Email, &["email", "mail", "@"]),
        ])
    }
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<SuggestionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SuggestionRule] {
        &self.rules
    }

    /// Suggests a field for a single header.
    pub fn suggest_field(&self, header: &str) -> Option<StandardField> {
        let lowered = header.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.field)
    }

    /// Suggests fields for every header.
    pub fn suggest(&self, headers: &[String]) -> SuggestionResult {
        let mut result = SuggestionResult::default();
        let mut seen_unmapped = BTreeSet::new();
        for header in headers {
            match self.suggest_field(header) {
                Some(field) => {
                    tracing::debug!(column = %header, field = %field, "suggested mapping");
                    result.mapping.assign(header.clone(), field);
                }
                None => {
                    if seen_unmapped.insert(header.as_str()) {
                        result.unmapped_columns.push(header.clone());
                    }
                }
            }
        }
        result
    }
}
