// Repository operations emit start/end (or end_error) events

use company_core::logging_facility::test_capture::init_test_capture;
use company_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DEPARTMENT_ID, FIELD_DURATION_MS,
    FIELD_EMPLOYEE_ID, FIELD_ERR_CODE,
};
use company_store::repo::{DepartmentRepo, EmployeeRepo};
use company_store::{db, schema};

#[test]
fn test_save_emits_start_and_end() {
    let capture = init_test_capture();
    let conn = db::open_in_memory().unwrap();
    schema::create_all(&conn).unwrap();

    DepartmentRepo::create(&conn, "Engineering", "Nairobi").unwrap();

    capture.assert_event_exists("department_save", EVENT_START);
    capture.assert_event_exists("department_save", EVENT_END);

    let end = capture
        .events_for("department_save")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert!(end.field(FIELD_DURATION_MS).is_some());
    assert!(end
        .component
        .as_deref()
        .unwrap()
        .starts_with("company_store::repo"));
}

#[test]
fn test_failed_operation_emits_end_error() {
    let capture = init_test_capture();
    let conn = db::open_in_memory().unwrap();

    // No tables exist, so the read fails inside SQLite
    EmployeeRepo::get_all(&conn).unwrap_err();

    let error_event = capture
        .events_for("employee_get_all")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("end_error event should be captured");
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_PERSISTENCE"));
}

#[test]
fn test_employee_save_records_ids_at_debug() {
    let capture = init_test_capture();
    let conn = db::open_in_memory().unwrap();
    schema::create_all(&conn).unwrap();

    EmployeeRepo::create(&conn, "Asha", "Engineer", 50_000, Some(3)).unwrap();

    let inserted = capture
        .events()
        .into_iter()
        .find(|e| e.field("message") == Some("inserted employee"))
        .expect("insert detail event should be captured");
    assert_eq!(inserted.field(FIELD_EMPLOYEE_ID), Some("1"));
    assert_eq!(inserted.field(FIELD_DEPARTMENT_ID), Some("Some(3)"));
}
