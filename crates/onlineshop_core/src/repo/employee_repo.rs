//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide lookup/save/delete by employee id over `employees` storage.
//! - Resolve department and manager names on read.
//!
//! # Invariants
//! - `save` validates the entity before touching SQL.
//! - `save` inserts when `id` is `None` and updates otherwise.
//! - `find_all` iterates in ascending id order.

use crate::model::department::Department;
use crate::model::employee::{Employee, EmployeeId, EmployeeRef};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    e.id AS id,
    e.name AS name,
    e.position AS position,
    e.salary AS salary,
    d.id AS department_id,
    d.name AS department_name,
    m.id AS manager_id,
    m.name AS manager_name
FROM employees e
JOIN departments d ON d.id = e.department_id
LEFT JOIN employees m ON m.id = e.manager_id";

/// Key-value style access to employees keyed by id.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait EmployeeRepository {
    fn find_all(&self) -> RepoResult<Vec<Employee>>;
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Persists the entity and returns the stored version.
    fn save(&self, employee: &Employee) -> RepoResult<Employee>;
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert(&self, employee: &Employee) -> RepoResult<Employee> {
        self.conn.execute(
            "INSERT INTO employees (
                name,
                position,
                salary,
                department_id,
                manager_id
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                employee.name.as_str(),
                employee.position.as_str(),
                employee.salary,
                employee.department.id,
                employee.manager.as_ref().map(|manager| manager.id),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=employee_insert module=repo status=ok employee_id={id}");

        let mut stored = employee.clone();
        stored.id = Some(id);
        Ok(stored)
    }

    fn update(&self, id: EmployeeId, employee: &Employee) -> RepoResult<Employee> {
        let changed = self.conn.execute(
            "UPDATE employees
             SET
                name = ?1,
                position = ?2,
                salary = ?3,
                department_id = ?4,
                manager_id = ?5
             WHERE id = ?6;",
            params![
                employee.name.as_str(),
                employee.position.as_str(),
                employee.salary,
                employee.department.id,
                employee.manager.as_ref().map(|manager| manager.id),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "employee",
                id,
            });
        }

        debug!("event=employee_update module=repo status=ok employee_id={id}");
        Ok(employee.clone())
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY e.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE e.id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_employee_row(row)?)),
            None => Ok(None),
        }
    }

    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        employee.validate()?;

        match employee.id {
            None => self.insert(employee),
            Some(id) => self.update(id, employee),
        }
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "employee",
                id,
            });
        }

        debug!("event=employee_delete module=repo status=ok employee_id={id}");
        Ok(())
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;

    let manager = match (
        row.get::<_, Option<EmployeeId>>("manager_id")?,
        row.get::<_, Option<String>>("manager_name")?,
    ) {
        (Some(manager_id), Some(manager_name)) => Some(EmployeeRef::new(manager_id, manager_name)),
        (None, None) => None,
        _ => {
            return Err(RepoError::InvalidData(format!(
                "employee {id} has a partially resolved manager reference"
            )));
        }
    };

    let employee = Employee {
        id: Some(id),
        name: row.get("name")?,
        position: row.get("position")?,
        salary: row.get("salary")?,
        department: Department {
            id: row.get("department_id")?,
            name: row.get("department_name")?,
        },
        manager,
    };

    employee
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("employee {id}: {err}")))?;
    Ok(employee)
}
