//! Employee request/response transfer objects.

use crate::model::department::DepartmentId;
use crate::model::employee::EmployeeId;
use serde::{Deserialize, Serialize};

/// Input for create and update calls.
///
/// `department_id` and `manager_id` are only consulted on create; updates
/// ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRequest {
    pub name: String,
    pub position: String,
    pub salary: i64,
    pub department_id: DepartmentId,
    #[serde(default)]
    pub manager_id: Option<EmployeeId>,
}

/// Output view of one employee with denormalized names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub salary: i64,
    pub department_name: String,
    /// Manager display name, or the no-manager placeholder.
    pub manager_name: String,
}
