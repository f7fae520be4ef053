//! Orchestration for the people data mapper.
//!
//! [`Wizard`] drives the upload → mapping → viewing flow over any
//! [`PeopleService`]; [`LocalPeopleService`] is the in-process service that
//! owns the session's record store.

#![deny(unsafe_code)]

pub mod error;
pub mod service;
pub mod wizard;

pub use error::{FlowError, Result, ServiceError};
pub use service::{LocalPeopleService, PeopleService};
pub use wizard::{Wizard, WizardAction, WizardState, WizardStep};
