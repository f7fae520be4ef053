//! CLI library components for the people data mapper.

pub mod import;
pub mod logging;
