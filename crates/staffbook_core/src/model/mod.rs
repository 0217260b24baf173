//! Domain model for employee records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one record shape for the table view, card view and form.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `EmployeeId`.
//! - The wire format is byte-compatible with the browser-era JSON blob.

pub mod employee;
