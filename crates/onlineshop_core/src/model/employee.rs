//! Employee entity.
//!
//! # Responsibility
//! - Define the canonical employee record stored by repositories.
//! - Provide write-time validation used by repository implementations.
//!
//! # Invariants
//! - `id` is `None` only before the first successful save.
//! - `department` is always present; `manager` is optional.
//! - `manager` never points at the employee itself.

use crate::model::department::Department;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persistence identifier of an employee row.
pub type EmployeeId = i64;

/// Lightweight reference to another employee acting as manager.
///
/// Only the identity and display name are loaded; the manager's own
/// department and manager chain are not followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: EmployeeId,
    pub name: String,
}

impl EmployeeRef {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by the repository on insert.
    pub id: Option<EmployeeId>,
    pub name: String,
    pub position: String,
    /// Whole currency units.
    pub salary: i64,
    pub department: Department,
    pub manager: Option<EmployeeRef>,
}

impl Employee {
    /// Creates an unsaved employee without a manager.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: i64,
        department: Department,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            position: position.into(),
            salary,
            department,
            manager: None,
        }
    }

    /// Returns this employee as a manager reference.
    ///
    /// `None` until the employee has been persisted.
    pub fn as_ref_for_manager(&self) -> Option<EmployeeRef> {
        self.id.map(|id| EmployeeRef::new(id, self.name.clone()))
    }

    /// Validates fields that every persisted employee must satisfy.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        if self.position.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyPosition);
        }
        if self.salary < 0 {
            return Err(EmployeeValidationError::NegativeSalary(self.salary));
        }
        if let (Some(id), Some(manager)) = (self.id, self.manager.as_ref()) {
            if manager.id == id {
                return Err(EmployeeValidationError::SelfManaged(id));
            }
        }
        Ok(())
    }
}

/// Invariant violation detected before an employee write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyName,
    EmptyPosition,
    NegativeSalary(i64),
    SelfManaged(EmployeeId),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "employee name must not be blank"),
            Self::EmptyPosition => write!(f, "employee position must not be blank"),
            Self::NegativeSalary(value) => {
                write!(f, "employee salary must not be negative, got {value}")
            }
            Self::SelfManaged(id) => write!(f, "employee {id} cannot be its own manager"),
        }
    }
}

impl Error for EmployeeValidationError {}
