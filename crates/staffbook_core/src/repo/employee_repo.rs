//! Employee record store over the named blob storage.
//!
//! # Responsibility
//! - CRUD over the `employees` collection with insertion order preserved.
//! - Read-modify-write the whole JSON blob on every mutation.
//!
//! # Invariants
//! - An absent or unparsable blob degrades to the empty collection; loading
//!   never fails the caller, only logs the degradation.
//! - `create` is the only place a record id is assigned.

use crate::db::{read_blob, write_blob, DbError};
use crate::model::employee::{DraftError, Employee, EmployeeDraft, EmployeeId};
use log::warn;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Storage key of the serialized employee collection.
pub const EMPLOYEES_BLOB: &str = "employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Record-store error for persistence and blob codec failures.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Draft(DraftError),
    Codec(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Draft(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "employee blob codec failure: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Draft(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<DraftError> for RepoError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Record-store contract for employee CRUD.
///
/// Callers run the validation engine before any write; the store itself only
/// guarantees identity and durability, not business rules.
pub trait EmployeeRepository {
    /// Returns the full collection in insertion order.
    fn list(&self) -> RepoResult<Vec<Employee>>;

    /// Returns one record by id.
    fn get(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;

    /// Assigns a fresh id to the draft, appends and persists the record.
    fn create(&self, draft: &EmployeeDraft) -> RepoResult<Employee>;

    /// Replaces the record with a matching id. Unknown ids are a no-op.
    fn update(&self, record: &Employee) -> RepoResult<()>;

    /// Removes one record. Returns whether anything was removed.
    fn delete(&self, id: EmployeeId) -> RepoResult<bool>;
}

/// Blob-backed employee repository.
pub struct KvEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> KvEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn load(&self) -> RepoResult<Vec<Employee>> {
        let Some(raw) = read_blob(self.conn, EMPLOYEES_BLOB)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Employee>>(&raw) {
            Ok(collection) => Ok(collection),
            Err(err) => {
                warn!(
                    "event=blob_load module=repo status=degraded blob={EMPLOYEES_BLOB} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn store(&self, collection: &[Employee]) -> RepoResult<()> {
        let raw = serde_json::to_string(collection)?;
        write_blob(self.conn, EMPLOYEES_BLOB, &raw)?;
        Ok(())
    }
}

impl EmployeeRepository for KvEmployeeRepository<'_> {
    fn list(&self) -> RepoResult<Vec<Employee>> {
        self.load()
    }

    fn get(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.load()?.into_iter().find(|record| record.id == id))
    }

    fn create(&self, draft: &EmployeeDraft) -> RepoResult<Employee> {
        let record = draft.assemble(Uuid::new_v4())?;
        let mut collection = self.load()?;
        collection.push(record.clone());
        self.store(&collection)?;
        Ok(record)
    }

    fn update(&self, record: &Employee) -> RepoResult<()> {
        let mut collection = self.load()?;
        let Some(slot) = collection.iter_mut().find(|stored| stored.id == record.id) else {
            warn!(
                "event=employee_update module=repo status=noop id={} reason=unknown_id",
                record.id
            );
            return Ok(());
        };

        *slot = record.clone();
        self.store(&collection)
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<bool> {
        let mut collection = self.load()?;
        let before = collection.len();
        collection.retain(|record| record.id != id);
        if collection.len() == before {
            return Ok(false);
        }

        self.store(&collection)?;
        Ok(true)
    }
}
