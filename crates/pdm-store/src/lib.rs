//! Record storage for the people data mapper.

#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod search;
pub mod store;

pub use error::{Result, StoreError};
pub use export::{write_csv, write_json};
pub use search::filter_records;
pub use store::RecordStore;
