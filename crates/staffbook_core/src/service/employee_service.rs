//! Employee use-case service.
//!
//! # Responsibility
//! - Validate drafts before any write reaches the store.
//! - Guard update, delete and bulk delete behind confirmation gates.
//!
//! # Invariants
//! - Validation failures are returned as data, never thrown.
//! - Creation commits immediately; overwrite and delete commit only after
//!   the matching gate grants proceed.

use crate::model::employee::{DraftError, Employee, EmployeeDraft, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use crate::validation::{validate_today, ValidationReport};
use crate::view::confirm::ConfirmationGate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case error: either a field-keyed validation report or a store error.
#[derive(Debug)]
pub enum ServiceError {
    Invalid(ValidationReport),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(report) => write!(f, "draft failed {} validation rule(s)", report.len()),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case wrapper owning the store handle and the three gates.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
    update_gate: ConfirmationGate<Employee>,
    delete_gate: ConfirmationGate<Employee>,
    bulk_delete_gate: ConfirmationGate<Vec<EmployeeId>>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            update_gate: ConfirmationGate::new(),
            delete_gate: ConfirmationGate::new(),
            bulk_delete_gate: ConfirmationGate::new(),
        }
    }

    /// Full collection in insertion order.
    pub fn list(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.list()?)
    }

    pub fn get(&self, id: EmployeeId) -> ServiceResult<Option<Employee>> {
        Ok(self.repo.get(id)?)
    }

    /// Resolves the raw id segment of an `/edit/:id` path to its record.
    pub fn find_for_edit(&self, raw_id: &str) -> ServiceResult<Option<Employee>> {
        let Ok(id) = Uuid::parse_str(raw_id) else {
            return Ok(None);
        };
        self.get(id)
    }

    /// Validates and persists a new record. Creation needs no confirmation.
    pub fn create_employee(&self, draft: &EmployeeDraft) -> ServiceResult<Employee> {
        let report = validate_today(draft, &self.repo.list()?);
        if !report.is_valid() {
            return Err(ServiceError::Invalid(report));
        }

        let record = self.repo.create(draft)?;
        info!(
            "event=employee_create module=service status=ok id={}",
            record.id
        );
        Ok(record)
    }

    /// Validates an edit draft and parks the assembled record in the update
    /// gate. The returned clone carries what the dialog needs to describe
    /// the overwrite; nothing is persisted until [`Self::confirm_update`].
    pub fn request_update(&mut self, draft: &EmployeeDraft) -> ServiceResult<Employee> {
        let report = validate_today(draft, &self.repo.list()?);
        if !report.is_valid() {
            return Err(ServiceError::Invalid(report));
        }

        let id = draft
            .id
            .ok_or(ServiceError::Repo(RepoError::Draft(DraftError::MissingId)))?;
        let record = draft.assemble(id).map_err(RepoError::from)?;
        self.update_gate.request(record.clone());
        Ok(record)
    }

    /// Commits the pending update. `None` when no update is pending.
    pub fn confirm_update(&mut self) -> ServiceResult<Option<Employee>> {
        let Some(record) = self.update_gate.proceed(|record| record) else {
            return Ok(None);
        };

        self.repo.update(&record)?;
        info!(
            "event=employee_update module=service status=ok id={}",
            record.id
        );
        Ok(Some(record))
    }

    pub fn cancel_update(&mut self) {
        self.update_gate.cancel();
    }

    /// Parks one record in the delete gate. `None` when the id is unknown,
    /// in which case nothing becomes pending.
    pub fn request_delete(&mut self, id: EmployeeId) -> ServiceResult<Option<Employee>> {
        let Some(record) = self.repo.get(id)? else {
            return Ok(None);
        };
        self.delete_gate.request(record.clone());
        Ok(Some(record))
    }

    /// Commits the pending single delete. `None` when nothing is pending.
    pub fn confirm_delete(&mut self) -> ServiceResult<Option<Employee>> {
        let Some(record) = self.delete_gate.proceed(|record| record) else {
            return Ok(None);
        };

        self.repo.delete(record.id)?;
        info!(
            "event=employee_delete module=service status=ok id={}",
            record.id
        );
        Ok(Some(record))
    }

    pub fn cancel_delete(&mut self) {
        self.delete_gate.cancel();
    }

    /// Parks a batch of ids in the bulk gate. An empty batch is ignored.
    pub fn request_bulk_delete(&mut self, ids: Vec<EmployeeId>) {
        if ids.is_empty() {
            return;
        }
        self.bulk_delete_gate.request(ids);
    }

    /// Commits the pending bulk delete, removing each id in turn, and
    /// returns how many records were actually removed. The caller clears
    /// its selection afterwards. Returns 0 when nothing is pending.
    pub fn confirm_bulk_delete(&mut self) -> ServiceResult<usize> {
        let Some(ids) = self.bulk_delete_gate.proceed(|ids| ids) else {
            return Ok(0);
        };

        let mut removed = 0;
        for id in ids {
            if self.repo.delete(id)? {
                removed += 1;
            }
        }
        info!("event=employee_bulk_delete module=service status=ok removed={removed}");
        Ok(removed)
    }

    pub fn cancel_bulk_delete(&mut self) {
        self.bulk_delete_gate.cancel();
    }

    /// True when any gate is waiting on a dialog decision.
    pub fn has_pending_confirmation(&self) -> bool {
        self.update_gate.payload().is_some()
            || self.delete_gate.payload().is_some()
            || self.bulk_delete_gate.payload().is_some()
    }
}
