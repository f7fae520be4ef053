//! Naive comma-split parsing of uploaded text.

mod parser;

pub use parser::{ParsedCsv, parse_csv_text};
