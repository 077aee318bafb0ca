//! Core domain logic for the online-shop back office.
//! This crate owns employee/department invariants and their persistence.

pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ShopConfig};
pub use dto::employee::{EmployeeRequest, EmployeeResponse};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use mapper::employee_mapper::{
    EmployeeMapper, RepositoryEmployeeMapper, NO_MANAGER_PLACEHOLDER,
};
pub use mapper::{MapperError, MapperResult};
pub use model::department::{Department, DepartmentId, DepartmentValidationError};
pub use model::employee::{Employee, EmployeeId, EmployeeRef, EmployeeValidationError};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::{RepoError, RepoResult};
pub use service::employee_service::{EmployeeService, ServiceError, ServiceResult};

use rusqlite::Connection;

/// Employee service wired to SQLite repositories sharing one connection.
pub type SqliteEmployeeService<'conn> = EmployeeService<
    SqliteEmployeeRepository<'conn>,
    RepositoryEmployeeMapper<SqliteDepartmentRepository<'conn>, SqliteEmployeeRepository<'conn>>,
>;

/// Builds the SQLite-backed employee service over a migrated connection.
pub fn sqlite_employee_service(conn: &Connection) -> SqliteEmployeeService<'_> {
    let mapper = RepositoryEmployeeMapper::new(
        SqliteDepartmentRepository::new(conn),
        SqliteEmployeeRepository::new(conn),
    );
    EmployeeService::new(SqliteEmployeeRepository::new(conn), mapper)
}

/// Minimal health-check API for wiring probes.
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
