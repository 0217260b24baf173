//! Draft validation entry points.
//!
//! # Responsibility
//! - Turn one draft plus the live collection into a field-keyed error map.
//! - Keep every failure recoverable data; nothing in this module panics or
//!   returns a transport error.

mod rules;

pub use rules::{validate, validate_today, ValidationErrorKind, ValidationReport};
