use staffbook_core::db::{open_db_in_memory, read_blob, write_blob};
use staffbook_core::{
    EmployeeDraft, EmployeeRepository, EmployeeService, Field, KvEmployeeRepository, ServiceError,
    ValidationErrorKind, EMPLOYEES_BLOB,
};

fn draft(first: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        id: None,
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        email: email.to_string(),
        phone: "+90 532 000 11 22".to_string(),
        department: "Analytics".to_string(),
        position: "Medior".to_string(),
        employment_date: "2021-04-01".to_string(),
        birth_date: "1991-02-03".to_string(),
    }
}

#[test]
fn create_assigns_id_and_appends_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvEmployeeRepository::new(&conn);

    let first = repo.create(&draft("One", "one@x.com")).unwrap();
    let second = repo.create(&draft("Two", "two@x.com")).unwrap();
    assert_ne!(first.id, second.id);

    let collection = repo.list().unwrap();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection[0].first_name, "One");
    assert_eq!(collection[1].first_name, "Two");
}

#[test]
fn get_finds_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvEmployeeRepository::new(&conn);

    let created = repo.create(&draft("Solo", "solo@x.com")).unwrap();
    let loaded = repo.get(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn update_replaces_the_matching_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvEmployeeRepository::new(&conn);

    let mut record = repo.create(&draft("Before", "edit@x.com")).unwrap();
    record.first_name = "After".to_string();
    repo.update(&record).unwrap();

    let loaded = repo.get(record.id).unwrap().unwrap();
    assert_eq!(loaded.first_name, "After");
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn update_with_unknown_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvEmployeeRepository::new(&conn);

    let stored = repo.create(&draft("Kept", "kept@x.com")).unwrap();
    let mut ghost = stored.clone();
    ghost.id = uuid::Uuid::new_v4();
    ghost.first_name = "Ghost".to_string();
    repo.update(&ghost).unwrap();

    let collection = repo.list().unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].first_name, "Kept");
}

#[test]
fn delete_removes_only_the_target() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvEmployeeRepository::new(&conn);

    let keep = repo.create(&draft("Keep", "keep@x.com")).unwrap();
    let doomed = repo.create(&draft("Doomed", "doomed@x.com")).unwrap();

    assert!(repo.delete(doomed.id).unwrap());
    assert!(!repo.delete(doomed.id).unwrap());

    let collection = repo.list().unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].id, keep.id);
}

#[test]
fn absent_blob_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvEmployeeRepository::new(&conn);
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn unparsable_blob_degrades_to_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    write_blob(&conn, EMPLOYEES_BLOB, "{not json").unwrap();

    let repo = KvEmployeeRepository::new(&conn);
    assert!(repo.list().unwrap().is_empty());

    // The store stays usable: the next write replaces the bad blob.
    repo.create(&draft("Fresh", "fresh@x.com")).unwrap();
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn browser_era_blob_loads_as_is() {
    let conn = open_db_in_memory().unwrap();
    write_blob(
        &conn,
        EMPLOYEES_BLOB,
        r#"[{"id":"a0a0a0a0-b1b1-4c2c-8d3d-e4e4e4e4e4e4","firstName":"Grace","lastName":"Hopper","email":"grace@x.com","phone":"0532 111 22 33","department":"Tech","position":"Senior","employmentDate":"2019-06-15","birthDate":"1985-01-02"}]"#,
    )
    .unwrap();

    let repo = KvEmployeeRepository::new(&conn);
    let collection = repo.list().unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].first_name, "Grace");
    assert_eq!(collection[0].position.as_str(), "Senior");
}

#[test]
fn every_mutation_rewrites_the_whole_blob() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvEmployeeRepository::new(&conn);

    let record = repo.create(&draft("Blob", "blob@x.com")).unwrap();
    let raw = read_blob(&conn, EMPLOYEES_BLOB).unwrap().unwrap();
    assert!(raw.contains("blob@x.com"));

    repo.delete(record.id).unwrap();
    let raw = read_blob(&conn, EMPLOYEES_BLOB).unwrap().unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn service_create_rejects_invalid_drafts_with_field_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    let mut bad = draft("", "nope");
    bad.phone = String::new();

    let err = service.create_employee(&bad).unwrap_err();
    let ServiceError::Invalid(report) = err else {
        panic!("expected validation error");
    };
    assert_eq!(report.error(Field::FirstName), Some(ValidationErrorKind::Required));
    assert_eq!(report.error(Field::Email), Some(ValidationErrorKind::InvalidEmail));
    assert_eq!(report.error(Field::Phone), Some(ValidationErrorKind::Required));
}

#[test]
fn service_create_rejects_duplicate_email_against_live_collection() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    service.create_employee(&draft("First", "same@x.com")).unwrap();
    let err = service.create_employee(&draft("Second", "same@x.com")).unwrap_err();

    let ServiceError::Invalid(report) = err else {
        panic!("expected validation error");
    };
    assert_eq!(
        report.error(Field::Email),
        Some(ValidationErrorKind::DuplicateEmail)
    );
}

#[test]
fn update_commits_only_after_confirmation() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    let stored = service.create_employee(&draft("Before", "flow@x.com")).unwrap();

    let mut edit = EmployeeDraft::from_record(&stored);
    edit.first_name = "After".to_string();
    let pending = service.request_update(&edit).unwrap();
    assert_eq!(pending.first_name, "After");
    assert!(service.has_pending_confirmation());

    // Not yet committed.
    assert_eq!(service.get(stored.id).unwrap().unwrap().first_name, "Before");

    let committed = service.confirm_update().unwrap().unwrap();
    assert_eq!(committed.first_name, "After");
    assert_eq!(service.get(stored.id).unwrap().unwrap().first_name, "After");
    assert!(!service.has_pending_confirmation());
}

#[test]
fn cancelled_update_leaves_the_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    let stored = service.create_employee(&draft("Same", "cancel@x.com")).unwrap();
    let mut edit = EmployeeDraft::from_record(&stored);
    edit.first_name = "Changed".to_string();
    service.request_update(&edit).unwrap();
    service.cancel_update();

    assert_eq!(service.get(stored.id).unwrap().unwrap().first_name, "Same");
    assert_eq!(service.confirm_update().unwrap(), None);
}

#[test]
fn editing_keeps_own_email_without_duplicate_error() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    let stored = service.create_employee(&draft("Own", "own@x.com")).unwrap();
    let edit = EmployeeDraft::from_record(&stored);
    assert!(service.request_update(&edit).is_ok());
}

#[test]
fn delete_commits_only_after_confirmation() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    let stored = service.create_employee(&draft("Doomed", "doomed@x.com")).unwrap();
    let pending = service.request_delete(stored.id).unwrap().unwrap();
    assert_eq!(pending.id, stored.id);
    assert_eq!(service.list().unwrap().len(), 1);

    let removed = service.confirm_delete().unwrap().unwrap();
    assert_eq!(removed.id, stored.id);
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn delete_request_for_unknown_id_pends_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    assert_eq!(service.request_delete(uuid::Uuid::new_v4()).unwrap(), None);
    assert!(!service.has_pending_confirmation());
    assert_eq!(service.confirm_delete().unwrap(), None);
}

#[test]
fn find_for_edit_resolves_only_well_formed_known_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(KvEmployeeRepository::new(&conn));

    let stored = service.create_employee(&draft("Route", "route@x.com")).unwrap();
    let found = service.find_for_edit(&stored.id.to_string()).unwrap().unwrap();
    assert_eq!(found.id, stored.id);

    assert_eq!(service.find_for_edit("not-a-uuid").unwrap(), None);
    assert_eq!(
        service
            .find_for_edit("00000000-0000-4000-8000-00000000dead")
            .unwrap(),
        None
    );
}
