//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five CRUD operations over the `EMPLOYEE` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The connection is borrowed; open/close is the caller's job.
//! - Point lookups return `Ok(None)` for missing rows, never an error.
//! - Concurrent calls against one connection must be serialized by the
//!   caller; this type adds no synchronization.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    EMPLOYEE_ID,
    EMPLOYEE_NAME,
    DEPARTMENT_NAME,
    ENTRANCE_DATE,
    JOB_NAME,
    SALARY
FROM EMPLOYEE";

const EMPLOYEE_TABLE: &str = "EMPLOYEE";

const REQUIRED_EMPLOYEE_COLUMNS: &[&str] = &[
    "EMPLOYEE_ID",
    "EMPLOYEE_NAME",
    "DEPARTMENT_NAME",
    "ENTRANCE_DATE",
    "JOB_NAME",
    "SALARY",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for employee persistence and query operations.
///
/// Driver failures and constraint violations both arrive as `Db`; callers
/// that care about the distinction inspect the `source()` chain.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    /// Point lookup by primary key. At most one row can match.
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Inclusive range lookup on salary, in unspecified row order.
    fn find_by_salary_range(&self, low: i64, high: i64) -> RepoResult<Vec<Employee>>;
    /// Inserts one full row. A duplicate id fails on the PK constraint.
    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId>;
    /// Deletes by primary key. Zero rows affected is a silent success.
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
    /// Adds `delta` (may be negative) to the salary of every row in the
    /// given department. Returns the affected-row count; zero is fine.
    fn update_salary_by_department(&self, department: &str, delta: i64) -> RepoResult<usize>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a bootstrapped connection after verifying its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not
    ///   match the latest migration this binary knows.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the
    ///   employee schema is absent or truncated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_schema(conn)?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE EMPLOYEE_ID = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn find_by_salary_range(&self, low: i64, high: i64) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL} WHERE ?1 <= SALARY AND SALARY <= ?2;"
        ))?;

        let mut rows = stmt.query(params![low, high])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn insert(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        self.conn.execute(
            "INSERT INTO EMPLOYEE VALUES(?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                employee.employee_id,
                employee.employee_name.as_str(),
                employee.department_name.as_str(),
                employee.entrance_date,
                employee.job_name.as_deref(),
                employee.salary,
            ],
        )?;

        Ok(employee.employee_id)
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM EMPLOYEE WHERE EMPLOYEE_ID = ?1;", params![id])?;

        Ok(())
    }

    fn update_salary_by_department(&self, department: &str, delta: i64) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE EMPLOYEE SET SALARY = SALARY + ?1 WHERE DEPARTMENT_NAME = ?2;",
            params![delta, department],
        )?;

        Ok(changed)
    }
}

fn verify_schema(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [EMPLOYEE_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(EMPLOYEE_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query([EMPLOYEE_TABLE])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_EMPLOYEE_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: EMPLOYEE_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let date_text: String = row.get("ENTRANCE_DATE")?;
    let entrance_date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date value `{date_text}` in EMPLOYEE.ENTRANCE_DATE"
        ))
    })?;

    Ok(Employee {
        employee_id: row.get("EMPLOYEE_ID")?,
        employee_name: row.get("EMPLOYEE_NAME")?,
        department_name: row.get("DEPARTMENT_NAME")?,
        entrance_date,
        job_name: row.get("JOB_NAME")?,
        salary: row.get("SALARY")?,
    })
}
