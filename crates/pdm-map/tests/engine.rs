use proptest::prelude::*;

use pdm_map::SuggestionEngine;
use pdm_model::StandardField;

fn headers(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn suggests_mappings_and_unmapped() {
    let engine = SuggestionEngine::default();
    let columns = headers(&[
        "Full Name",
        "Organization",
        "Mobile",
        "Email Address",
        "Notes",
        "Notes",
    ]);
    let result = engine.suggest(&columns);

    assert_eq!(result.mapping.get("Full Name"), Some(StandardField::Name));
    assert_eq!(result.mapping.get("Organization"), Some(StandardField::Company));
    assert_eq!(result.mapping.get("Mobile"), Some(StandardField::Phone));
    assert_eq!(result.mapping.get("Email Address"), Some(StandardField::Email));
    assert_eq!(result.mapping.get("Notes"), None);
    assert_eq!(result.unmapped_columns, vec!["Notes".to_string()]);
}

#[test]
fn scenario_a_suggestions() {
    let engine = SuggestionEngine::default();
    let result = engine.suggest(&headers(&["Full Name", "Email Address"]));

    let pairs: Vec<(&str, StandardField)> = result.mapping.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("Email Address", StandardField::Email),
            ("Full Name", StandardField::Name),
        ]
    );
    assert!(result.unmapped_columns.is_empty());
}

proptest! {
    #[test]
    fn suggestions_are_deterministic(columns in prop::collection::vec("[ A-Za-z@]{0,12}", 0..10)) {
        let engine = SuggestionEngine::default();
        let first = engine.suggest(&columns);
        let second = engine.suggest(&columns);
        prop_assert_eq!(first.mapping, second.mapping);
        prop_assert_eq!(first.unmapped_columns, second.unmapped_columns);
    }

    #[test]
    fn every_column_is_either_mapped_or_unmapped(columns in prop::collection::vec("[ A-Za-z@]{0,12}", 0..10)) {
        let result = SuggestionEngine::default().suggest(&columns);
        for column in &columns {
            let mapped = result.mapping.get(column).is_some();
            let unmapped = result.unmapped_columns.contains(column);
            prop_assert!(mapped != unmapped);
        }
    }
}
