//! Read-side view state for the list screen.
//!
//! # Responsibility
//! - Derive the visible page from the full collection plus search/page input.
//! - Track row selection and gate destructive or overwrite commits.
//!
//! These types hold no persistent state of their own; the record store stays
//! the single source of truth and is re-read after every mutation.

pub mod confirm;
pub mod list;
pub mod selection;
