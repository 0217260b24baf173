//! Core domain logic for Staffbook.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod repo;
pub mod route;
pub mod service;
pub mod validation;
pub mod view;

pub use i18n::{I18nError, ListenerId, Translator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{
    Department, DraftError, Employee, EmployeeDraft, EmployeeId, Field, Position,
};
pub use repo::employee_repo::{
    EmployeeRepository, KvEmployeeRepository, RepoError, RepoResult, EMPLOYEES_BLOB,
};
pub use route::Route;
pub use service::employee_service::{EmployeeService, ServiceError, ServiceResult};
pub use validation::{validate, validate_today, ValidationErrorKind, ValidationReport};
pub use view::confirm::{ConfirmationGate, GateState};
pub use view::list::{derive_page, page_links, ListState, PageLink, PageView, DEFAULT_PAGE_SIZE};
pub use view::selection::SelectionTracker;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
