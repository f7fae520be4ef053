//! Shared types for the people data mapper.
//!
//! - [`StandardField`]: the fixed target fields and their labels
//! - [`ColumnMapping`] / [`ConfirmedMapping`]: header to field assignments
//! - [`Record`]: one person entry with a session-scoped [`RecordId`]
//! - [`UploadResponse`]: what the upload step hands to the mapping step
//! - [`Notice`]: user-visible notifications

#![deny(unsafe_code)]

pub mod error;
pub mod field;
pub mod mapping;
pub mod notice;
pub mod record;
pub mod upload;

pub use error::{ModelError, Result};
pub use field::StandardField;
pub use mapping::{ColumnMapping, ConfirmedMapping};
pub use notice::{Notice, NoticeVariant};
pub use record::{Record, RecordId, RecordIdSequence};
pub use upload::UploadResponse;
