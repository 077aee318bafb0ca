//! Department repository contract and SQLite implementation.

use crate::model::department::{validate_department_name, Department, DepartmentId};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name FROM departments";

/// Lookup and registration of departments.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait DepartmentRepository {
    /// Inserts a department and returns it with its assigned id.
    fn create_department(&self, name: &str) -> RepoResult<Department>;
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Lists departments in ascending id order.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_department(&self, name: &str) -> RepoResult<Department> {
        validate_department_name(name)?;
        let name = name.trim();

        self.conn
            .execute("INSERT INTO departments (name) VALUES (?1);", params![name])?;

        Ok(Department::new(self.conn.last_insert_rowid(), name))
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let department = self
            .conn
            .query_row(
                &format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_department_row,
            )
            .optional()?;
        Ok(department)
    }

    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let departments = stmt
            .query_map([], parse_department_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
