//! FFI use-case API for shell-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI via FRB.
//! - Keep error semantics simple: envelopes with a message, never a panic.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Validation failures travel as per-field error items, not exceptions.
//! - The shell shows its confirmation dialog before calling a committing
//!   delete/update function; the gates inside core stay on the shell side
//!   of that contract.

use staffbook_core::db::open_db;
use staffbook_core::{
    core_version as core_version_inner, derive_page, init_logging as init_logging_inner,
    page_links, ping as ping_inner, EmployeeDraft, EmployeeService, KvEmployeeRepository,
    PageLink, Route, ServiceError, Translator,
};
use log::info;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;

const STORE_DB_FILE_NAME: &str = "staffbook.sqlite3";
const DEFAULT_LOCALE_DIR: &str = "locales";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One employee row for list/table display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeItem {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub employment_date: String,
    pub birth_date: String,
}

/// Derived page envelope for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePageResponse {
    pub items: Vec<EmployeeItem>,
    pub page_count: u32,
    pub effective_page: u32,
    /// Condensed page strip: page numbers plus `"..."` gap markers.
    pub page_links: Vec<String>,
    pub message: String,
}

/// Raw form fields crossing the boundary as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormInput {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub employment_date: String,
    pub birth_date: String,
}

/// One failed validation rule, keyed by form field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorItem {
    /// Form field name (`firstName`, `email`, ...).
    pub field: String,
    /// Label key of the inline message (`required`, `uniqueEmail`, ...).
    pub error: String,
}

/// Save/delete result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEmployeeResponse {
    pub ok: bool,
    pub employee_id: Option<String>,
    pub field_errors: Vec<FieldErrorItem>,
    pub message: String,
}

/// Generic action envelope carrying an affected-record count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub affected: u32,
    pub message: String,
}

/// Resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResponse {
    /// `list`, `new`, `edit` or `not_found`.
    pub kind: String,
    /// Raw id segment, present only for `edit`.
    pub employee_id: Option<String>,
}

/// Derives one page of the employee list.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; storage failures return an empty page with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_employees(search: String, page: u32, page_size: u32) -> EmployeePageResponse {
    let conn = match open_store() {
        Ok(conn) => conn,
        Err(message) => {
            return EmployeePageResponse {
                items: Vec::new(),
                page_count: 0,
                effective_page: page,
                page_links: Vec::new(),
                message,
            };
        }
    };

    let service = EmployeeService::new(KvEmployeeRepository::new(&conn));
    let collection = match service.list() {
        Ok(collection) => collection,
        Err(err) => {
            return EmployeePageResponse {
                items: Vec::new(),
                page_count: 0,
                effective_page: page,
                page_links: Vec::new(),
                message: format!("list_employees failed: {err}"),
            };
        }
    };

    let view = derive_page(&collection, &search, page, page_size);
    let links = page_links(view.page_count, view.effective_page)
        .into_iter()
        .map(|link| match link {
            PageLink::Page(n) => n.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        })
        .collect();

    EmployeePageResponse {
        items: view.page_items.iter().map(to_employee_item).collect(),
        page_count: view.page_count,
        effective_page: view.effective_page,
        page_links: links,
        message: if view.page_items.is_empty() {
            "No employees found.".to_string()
        } else {
            format!("Showing {} employee(s).", view.page_items.len())
        },
    }
}

/// Validates and persists one form submission.
///
/// Routes to create or update by the presence of `id`; the shell has
/// already taken the overwrite confirmation for updates.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; failed rules come back as `field_errors`.
#[flutter_rust_bridge::frb(sync)]
pub fn save_employee(input: EmployeeFormInput) -> SaveEmployeeResponse {
    let draft = match to_draft(&input) {
        Ok(draft) => draft,
        Err(message) => return SaveEmployeeResponse {
            ok: false,
            employee_id: None,
            field_errors: Vec::new(),
            message,
        },
    };

    let conn = match open_store() {
        Ok(conn) => conn,
        Err(message) => {
            return SaveEmployeeResponse {
                ok: false,
                employee_id: None,
                field_errors: Vec::new(),
                message,
            };
        }
    };
    let mut service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    let result = if draft.id.is_some() {
        service
            .request_update(&draft)
            .and_then(|_| service.confirm_update())
            .map(|committed| committed.map(|record| record.id))
    } else {
        service.create_employee(&draft).map(|record| Some(record.id))
    };

    match result {
        Ok(Some(id)) => {
            info!("event=employee_save module=ffi status=ok id={id}");
            SaveEmployeeResponse {
                ok: true,
                employee_id: Some(id.to_string()),
                field_errors: Vec::new(),
                message: "Employee saved.".to_string(),
            }
        }
        Ok(None) => SaveEmployeeResponse {
            ok: false,
            employee_id: None,
            field_errors: Vec::new(),
            message: "Nothing to save.".to_string(),
        },
        Err(ServiceError::Invalid(report)) => SaveEmployeeResponse {
            ok: false,
            employee_id: None,
            field_errors: report
                .iter()
                .map(|(field, kind)| FieldErrorItem {
                    field: field.as_str().to_string(),
                    error: kind.message_key().to_string(),
                })
                .collect(),
            message: "Validation failed.".to_string(),
        },
        Err(err) => SaveEmployeeResponse {
            ok: false,
            employee_id: None,
            field_errors: Vec::new(),
            message: format!("save_employee failed: {err}"),
        },
    }
}

/// Deletes one employee after the shell's confirmation dialog.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_employee(id: String) -> ActionResponse {
    let Ok(parsed) = uuid::Uuid::parse_str(id.trim()) else {
        return ActionResponse {
            ok: false,
            affected: 0,
            message: format!("delete_employee failed: malformed id `{id}`"),
        };
    };

    with_service(|service| {
        service.request_delete(parsed)?;
        Ok(service.confirm_delete()?.map_or(0, |_| 1))
    })
}

/// Deletes a selection batch after the shell's confirmation dialog.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_employees(ids: Vec<String>) -> ActionResponse {
    let mut parsed = Vec::with_capacity(ids.len());
    for id in &ids {
        match uuid::Uuid::parse_str(id.trim()) {
            Ok(value) => parsed.push(value),
            Err(_) => {
                return ActionResponse {
                    ok: false,
                    affected: 0,
                    message: format!("delete_employees failed: malformed id `{id}`"),
                };
            }
        }
    }

    with_service(|service| {
        service.request_bulk_delete(parsed);
        Ok(service.confirm_bulk_delete()? as u32)
    })
}

/// Resolves a navigation path to a screen.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_route(path: String) -> RouteResponse {
    match Route::parse(&path) {
        Route::List => RouteResponse {
            kind: "list".to_string(),
            employee_id: None,
        },
        Route::New => RouteResponse {
            kind: "new".to_string(),
            employee_id: None,
        },
        Route::Edit(id) => RouteResponse {
            kind: "edit".to_string(),
            employee_id: Some(id),
        },
        Route::NotFound => RouteResponse {
            kind: "not_found".to_string(),
            employee_id: None,
        },
    }
}

/// Resolves one label key for the given language.
///
/// Loads the locale table through the versioned store cache; unresolved
/// keys echo back verbatim, so this never fails the shell.
#[flutter_rust_bridge::frb(sync)]
pub fn translate(lang: String, key: String) -> String {
    let Ok(conn) = open_store() else {
        return key;
    };

    let mut translator = Translator::new(resolve_locale_dir(), lang.clone());
    translator.switch_language(&conn, lang);
    translator.t(&key)
}

fn to_employee_item(record: &staffbook_core::Employee) -> EmployeeItem {
    EmployeeItem {
        id: record.id.to_string(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        email: record.email.clone(),
        phone: record.phone.clone(),
        department: record.department.as_str().to_string(),
        position: record.position.as_str().to_string(),
        employment_date: record.employment_date.to_string(),
        birth_date: record.birth_date.to_string(),
    }
}

fn to_draft(input: &EmployeeFormInput) -> Result<EmployeeDraft, String> {
    let id = match input.id.as_deref() {
        None => None,
        Some(raw) => Some(
            uuid::Uuid::parse_str(raw.trim())
                .map_err(|_| format!("save_employee failed: malformed id `{raw}`"))?,
        ),
    };

    Ok(EmployeeDraft {
        id,
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        email: input.email.clone(),
        phone: input.phone.clone(),
        department: input.department.clone(),
        position: input.position.clone(),
        employment_date: input.employment_date.clone(),
        birth_date: input.birth_date.clone(),
    })
}

fn with_service(
    f: impl FnOnce(&mut EmployeeService<KvEmployeeRepository<'_>>) -> Result<u32, ServiceError>,
) -> ActionResponse {
    let conn = match open_store() {
        Ok(conn) => conn,
        Err(message) => {
            return ActionResponse {
                ok: false,
                affected: 0,
                message,
            };
        }
    };

    let mut service = EmployeeService::new(KvEmployeeRepository::new(&conn));
    match f(&mut service) {
        Ok(affected) => ActionResponse {
            ok: true,
            affected,
            message: format!("{affected} record(s) affected."),
        },
        Err(err) => ActionResponse {
            ok: false,
            affected: 0,
            message: format!("store operation failed: {err}"),
        },
    }
}

fn open_store() -> Result<Connection, String> {
    open_db(resolve_store_db_path()).map_err(|err| format!("store open failed: {err}"))
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("STAFFBOOK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn resolve_locale_dir() -> PathBuf {
    if let Ok(raw) = std::env::var("STAFFBOOK_LOCALE_DIR") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_LOCALE_DIR)
}
