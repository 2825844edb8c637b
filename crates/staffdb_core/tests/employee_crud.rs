use chrono::NaiveDate;
use rusqlite::Connection;
use staffdb_core::db::migrations::latest_version;
use staffdb_core::db::open_db_in_memory;
use staffdb_core::{
    Employee, EmployeeRepository, EmployeeService, RepoError, SqliteEmployeeRepository,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn alice() -> Employee {
    Employee::new(10001, "Alice", "SALES", date(2015, 4, 1), 500_000).with_job_name("MANAGER")
}

#[test]
fn insert_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let employee = alice();
    let id = repo.insert(&employee).unwrap();
    assert_eq!(id, 10001);

    let loaded = repo.find_by_id(10001).unwrap().unwrap();
    assert_eq!(loaded, employee);
}

#[test]
fn find_missing_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    repo.insert(&alice()).unwrap();

    assert!(repo.find_by_id(99999).unwrap().is_none());
}

#[test]
fn roundtrip_preserves_absent_job_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let untitled = Employee::new(20002, "Bob", "HR", date(2020, 10, 15), 280_000);
    repo.insert(&untitled).unwrap();

    let loaded = repo.find_by_id(20002).unwrap().unwrap();
    assert_eq!(loaded.job_name, None);
    assert_ne!(loaded.job_name, Some(String::new()));
}

#[test]
fn duplicate_id_insert_surfaces_constraint_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    repo.insert(&alice()).unwrap();

    let mut clash = alice();
    clash.employee_name = "Someone Else".to_string();
    let err = repo.insert(&clash).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));

    // First row must be untouched by the failed insert.
    let loaded = repo.find_by_id(10001).unwrap().unwrap();
    assert_eq!(loaded.employee_name, "Alice");
}

#[test]
fn delete_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    repo.insert(&alice()).unwrap();
    repo.delete_by_id(10001).unwrap();

    assert!(repo.find_by_id(10001).unwrap().is_none());
}

#[test]
fn delete_of_missing_id_is_silent_and_leaves_table_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    repo.insert(&alice()).unwrap();
    repo.delete_by_id(99999).unwrap();

    assert!(repo.find_by_id(10001).unwrap().is_some());
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let service = EmployeeService::new(repo);

    let id = service
        .hire(30003, "Carol", "ENGINEERING", date(2022, 1, 10), None, 420_000)
        .unwrap();
    assert_eq!(id, 30003);

    let fetched = service.find_by_id(id).unwrap().unwrap();
    assert_eq!(fetched.employee_name, "Carol");
    assert_eq!(fetched.job_name, None);

    service.delete_by_id(id).unwrap();
    assert!(service.find_by_id(id).unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteEmployeeRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_employee_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteEmployeeRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("EMPLOYEE"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE EMPLOYEE (
            EMPLOYEE_ID INTEGER PRIMARY KEY,
            EMPLOYEE_NAME TEXT NOT NULL,
            DEPARTMENT_NAME TEXT NOT NULL,
            SALARY INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteEmployeeRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "EMPLOYEE",
            column: "ENTRANCE_DATE"
        })
    ));
}

#[test]
fn malformed_persisted_date_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO EMPLOYEE VALUES(40004, 'Mallory', 'SALES', 'not-a-date', NULL, 100000);",
        [],
    )
    .unwrap();

    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let err = repo.find_by_id(40004).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
