//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record-store contract the services depend on.
//! - Isolate blob serialization and storage details from orchestration.
//!
//! # Invariants
//! - The store is the sole owner of persisted records; every consumer
//!   re-reads it after a mutation.
//! - Each mutation commits the full collection atomically; no partial-write
//!   state is observable.

pub mod employee_repo;
