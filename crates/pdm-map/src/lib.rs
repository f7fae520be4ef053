//! Column mapping for the people data mapper.
//!
//! - [`SuggestionEngine`] proposes a field for each header by keyword.
//! - [`MappingState`] holds the user's edits until confirmation.
//! - [`apply_mapping`] turns parsed rows into [`pdm_model::Record`]s.

#![deny(unsafe_code)]

pub mod apply;
pub mod engine;
pub mod error;
pub mod state;

pub use apply::{ApplyOutcome, apply_mapping};
pub use engine::{SuggestionEngine, SuggestionResult, SuggestionRule};
pub use error::{MappingError, Result};
pub use state::{ColumnStatus, MappingState, MappingSummary};
