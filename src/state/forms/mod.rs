//! Form domain layer
//!
//! Typed fields grouped into ordered steps, built once from a
//! [`FormDefinition`].

mod definition;
mod field;
mod form_state;

pub use definition::{FormDefinition, HONEYPOT_FIELD};
pub use field::{FieldKind, FieldValue, FormField};
pub use form_state::{FormData, Step, WizardForm};
