use staffbook_core::db::open_db_in_memory;
use staffbook_core::Translator;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

fn locale_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{"firstName":"First Name","editConfirmDesc":"Update {firstName} {lastName}?"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("tr.json"),
        r#"{"firstName":"Ad","editConfirmDesc":"{firstName} {lastName} guncellensin mi?"}"#,
    )
    .unwrap();
    dir
}

#[test]
fn keys_echo_back_before_any_table_loads() {
    let dir = locale_dir();
    let translator = Translator::new(dir.path(), "en");
    assert_eq!(translator.t("firstName"), "firstName");
}

#[test]
fn switch_language_resolves_keys_and_falls_back_per_key() {
    let dir = locale_dir();
    let conn = open_db_in_memory().unwrap();
    let mut translator = Translator::new(dir.path(), "en");

    translator.switch_language(&conn, "en");
    assert_eq!(translator.language(), "en");
    assert_eq!(translator.t("firstName"), "First Name");
    assert_eq!(translator.t("unknownKey"), "unknownKey");

    translator.switch_language(&conn, "tr");
    assert_eq!(translator.t("firstName"), "Ad");
}

#[test]
fn format_substitutes_placeholders() {
    let dir = locale_dir();
    let conn = open_db_in_memory().unwrap();
    let mut translator = Translator::new(dir.path(), "en");
    translator.switch_language(&conn, "en");

    let text = translator.format(
        "editConfirmDesc",
        &[("firstName", "Ada"), ("lastName", "Lovelace")],
    );
    assert_eq!(text, "Update Ada Lovelace?");
}

#[test]
fn missing_locale_file_degrades_to_key_echo() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db_in_memory().unwrap();
    let mut translator = Translator::new(dir.path(), "en");

    translator.switch_language(&conn, "en");
    assert_eq!(translator.language(), "en");
    assert_eq!(translator.t("firstName"), "firstName");
}

#[test]
fn cached_table_survives_locale_file_removal() {
    let dir = locale_dir();
    let conn = open_db_in_memory().unwrap();

    let mut translator = Translator::new(dir.path(), "en");
    translator.switch_language(&conn, "en");
    assert_eq!(translator.t("firstName"), "First Name");

    // The cache entry written on first load serves the second translator
    // even though the file is gone.
    fs::remove_file(dir.path().join("en.json")).unwrap();
    let mut second = Translator::new(dir.path(), "en");
    second.switch_language(&conn, "en");
    assert_eq!(second.t("firstName"), "First Name");
}

#[test]
fn listeners_hear_switches_until_unsubscribed() {
    let dir = locale_dir();
    let conn = open_db_in_memory().unwrap();
    let mut translator = Translator::new(dir.path(), "en");

    let heard: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&heard);
    let id = translator.subscribe(move |lang| sink.borrow_mut().push(lang.to_string()));

    translator.switch_language(&conn, "tr");
    translator.switch_language(&conn, "en");
    translator.unsubscribe(id);
    translator.switch_language(&conn, "tr");

    assert_eq!(*heard.borrow(), vec!["tr".to_string(), "en".to_string()]);
}
