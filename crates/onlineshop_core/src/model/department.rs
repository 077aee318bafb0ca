//! Department entity.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persistence identifier of a department row.
pub type DepartmentId = i64;

/// Organisational unit an employee belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

impl Department {
    pub fn new(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Rejected department name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentValidationError {
    EmptyName,
}

impl Display for DepartmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "department name must not be blank"),
        }
    }
}

impl Error for DepartmentValidationError {}

/// Checks a department name before it is written.
pub fn validate_department_name(name: &str) -> Result<(), DepartmentValidationError> {
    if name.trim().is_empty() {
        return Err(DepartmentValidationError::EmptyName);
    }
    Ok(())
}
