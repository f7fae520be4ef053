//! Upload ingestion for the people data mapper.
//!
//! This crate validates a selected file by name, reads its bytes, and splits
//! the text into a header row and data rows.
//!
//! # Example
//!
//! ```ignore
//! use pdm_ingest::{SelectedFile, parse_csv_text};
//!
//! let file = SelectedFile::select("contacts.csv")?;
//! let parsed = parse_csv_text(&file.read_text()?)?;
//! println!("{} columns", parsed.header_count());
//! ```

#![deny(unsafe_code)]

mod error;
mod source;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use text::{ParsedCsv, parse_csv_text};

// === File Selection ===
pub use source::{CSV_SUFFIX, SelectedFile, generate_file_id, validate_csv_name};
