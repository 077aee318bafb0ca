//! Translation between transfer objects and persisted entities.
//!
//! # Invariants
//! - Reference ids in requests are resolved through repositories, never
//!   trusted blindly.
//! - The missing-manager placeholder exists only in responses.

pub mod employee_mapper;

use crate::model::department::DepartmentId;
use crate::model::employee::EmployeeId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MapperResult<T> = Result<T, MapperError>;

#[derive(Debug)]
pub enum MapperError {
    /// Request names a department that does not exist.
    DepartmentNotFound(DepartmentId),
    /// Request names a manager that does not exist.
    ManagerNotFound(EmployeeId),
    /// Entity has no id yet and cannot be rendered.
    Unsaved,
    Repo(RepoError),
}

impl Display for MapperError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepartmentNotFound(id) => write!(f, "department not found: {id}"),
            Self::ManagerNotFound(id) => write!(f, "manager not found: {id}"),
            Self::Unsaved => write!(f, "employee has not been persisted yet"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MapperError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for MapperError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
