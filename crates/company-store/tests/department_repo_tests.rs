// Integration tests for department persistence

use company_core::model::NewDepartment;
use company_store::repo::DepartmentRepo;
use company_store::{db, schema};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let conn = db::open_in_memory().expect("Failed to create in-memory database");
    schema::create_all(&conn).unwrap();
    conn
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_create_then_find_by_id() {
    // Given: A department created through the repository
    let conn = setup_test_db();
    let created = DepartmentRepo::create(&conn, "Engineering", "Nairobi").unwrap();

    // When: We read it back by id
    let found = DepartmentRepo::find_by_id(&conn, created.id()).unwrap();

    // Then: The stored entity equals the created one
    assert_eq!(found, Some(created));
}

#[test]
fn test_update_keeps_row_count() {
    // Given: A saved department
    let conn = setup_test_db();
    let mut dept = DepartmentRepo::save(&conn, NewDepartment::new("Sales", "Nakuru")).unwrap();
    assert_eq!(row_count(&conn), 1);

    // When: It is changed and saved again
    dept.location = Some("Eldoret".to_string());
    DepartmentRepo::update(&conn, &dept).unwrap();

    // Then: The same row is updated and no row is added
    assert_eq!(row_count(&conn), 1);
    let reloaded = DepartmentRepo::find_by_id(&conn, dept.id()).unwrap().unwrap();
    assert_eq!(reloaded.location.as_deref(), Some("Eldoret"));
    assert_eq!(reloaded.id(), dept.id());
}

#[test]
fn test_delete_removes_row_and_returns_transient() {
    // Given: Two departments
    let conn = setup_test_db();
    let keep = DepartmentRepo::create(&conn, "Legal", "Nairobi").unwrap();
    let gone = DepartmentRepo::create(&conn, "Marketing", "Mombasa").unwrap();
    let gone_id = gone.id();

    // When: One is deleted
    let transient = DepartmentRepo::delete(&conn, gone).unwrap();

    // Then: get_all no longer lists it and its data comes back without an id
    let all = DepartmentRepo::get_all(&conn).unwrap();
    assert_eq!(all, vec![keep]);
    assert_eq!(transient, NewDepartment::new("Marketing", "Mombasa"));
    assert_eq!(DepartmentRepo::find_by_id(&conn, gone_id).unwrap(), None);
}

#[test]
fn test_resaving_deleted_department_gets_new_id() {
    let conn = setup_test_db();
    let first = DepartmentRepo::create(&conn, "Ops", "Thika").unwrap();
    let _second = DepartmentRepo::create(&conn, "HR", "Thika").unwrap();

    let transient = DepartmentRepo::delete(&conn, first).unwrap();
    let resaved = DepartmentRepo::save(&conn, transient).unwrap();

    assert_eq!(resaved.id(), 3);
    assert_eq!(row_count(&conn), 2);
}

#[test]
fn test_lookups_return_none_when_missing() {
    let conn = setup_test_db();

    assert_eq!(DepartmentRepo::find_by_id(&conn, 99).unwrap(), None);
    assert_eq!(DepartmentRepo::find_by_name(&conn, "Nowhere").unwrap(), None);
}

#[test]
fn test_find_by_name_returns_first_match() {
    let conn = setup_test_db();
    let first = DepartmentRepo::create(&conn, "Support", "Nairobi").unwrap();
    DepartmentRepo::create(&conn, "Support", "Kisumu").unwrap();

    let found = DepartmentRepo::find_by_name(&conn, "Support").unwrap();
    assert_eq!(found, Some(first));
}

#[test]
fn test_get_all_on_empty_table() {
    let conn = setup_test_db();
    assert!(DepartmentRepo::get_all(&conn).unwrap().is_empty());
}

#[test]
fn test_instance_from_db_matches_saved_entity() {
    // Given: A saved department
    let conn = setup_test_db();
    let saved = DepartmentRepo::create(&conn, "Research", "Kisumu").unwrap();

    // When: The raw row is mapped, with columns deliberately out of order
    let mapped = conn
        .query_row(
            "SELECT location, id, name FROM departments WHERE id = ?1",
            [saved.id()],
            DepartmentRepo::instance_from_db,
        )
        .unwrap();

    // Then: Mapping by column name yields the same entity
    assert_eq!(mapped, saved);
}

#[test]
fn test_table_lifecycle_is_idempotent() {
    let conn = db::open_in_memory().unwrap();

    DepartmentRepo::create_table(&conn).unwrap();
    DepartmentRepo::create_table(&conn).unwrap();
    assert!(schema::table_exists(&conn, schema::DEPARTMENTS_TABLE).unwrap());

    DepartmentRepo::drop_table(&conn).unwrap();
    DepartmentRepo::drop_table(&conn).unwrap();
    assert!(!schema::table_exists(&conn, schema::DEPARTMENTS_TABLE).unwrap());
}

#[test]
fn test_null_columns_read_back_as_none() {
    // Given: A row written outside the repository with a NULL name
    let conn = setup_test_db();
    conn.execute(
        "INSERT INTO departments (name, location) VALUES (NULL, 'Kisumu')",
        [],
    )
    .unwrap();
    let named = DepartmentRepo::create(&conn, "Engineering", "Nairobi").unwrap();

    // When: The table is read through the repository
    let all = DepartmentRepo::get_all(&conn).unwrap();

    // Then: The NULL cell is absent and the rest of the table still loads
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, None);
    assert_eq!(all[0].location.as_deref(), Some("Kisumu"));
    assert_eq!(all[1], named);
    assert_eq!(DepartmentRepo::find_by_id(&conn, 1).unwrap(), Some(all[0].clone()));
}

#[test]
fn test_save_and_update_write_nulls() {
    let conn = setup_test_db();
    let mut dept = DepartmentRepo::save(
        &conn,
        NewDepartment {
            name: Some("Archive".to_string()),
            location: None,
        },
    )
    .unwrap();

    dept.name = None;
    DepartmentRepo::update(&conn, &dept).unwrap();

    let both_null: bool = conn
        .query_row(
            "SELECT name IS NULL AND location IS NULL FROM departments WHERE id = ?1",
            [dept.id()],
            |row| row.get(0),
        )
        .unwrap();
    assert!(both_null);
    assert_eq!(DepartmentRepo::find_by_id(&conn, dept.id()).unwrap(), Some(dept));
}
