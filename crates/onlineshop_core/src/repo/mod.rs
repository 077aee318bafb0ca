//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define data-access contracts consumed by mappers and services.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate entities before any SQL mutation.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod department_repo;
pub mod employee_repo;

use crate::db::DbError;
use crate::model::department::DepartmentValidationError;
use crate::model::employee::EmployeeValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer failure shared by all repositories.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    DepartmentValidation(DepartmentValidationError),
    Db(DbError),
    /// A write targeted a row that does not exist.
    NotFound { entity: &'static str, id: i64 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DepartmentValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DepartmentValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DepartmentValidationError> for RepoError {
    fn from(value: DepartmentValidationError) -> Self {
        Self::DepartmentValidation(value)
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
