//! Employee mapper contract and its repository-backed implementation.

use crate::dto::employee::{EmployeeRequest, EmployeeResponse};
use crate::mapper::{MapperError, MapperResult};
use crate::model::employee::Employee;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;

/// Display value used when an employee has no manager.
pub const NO_MANAGER_PLACEHOLDER: &str = "Нет менеджера";

/// Converts between employee transfer objects and entities.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait EmployeeMapper {
    /// Builds an unsaved entity from a create request.
    fn to_entity(&self, request: &EmployeeRequest) -> MapperResult<Employee>;
    /// Renders a persisted entity.
    fn to_response(&self, employee: &Employee) -> MapperResult<EmployeeResponse>;
}

/// Mapper that resolves department and manager ids through repositories.
pub struct RepositoryEmployeeMapper<D, E> {
    departments: D,
    employees: E,
}

impl<D, E> RepositoryEmployeeMapper<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    pub fn new(departments: D, employees: E) -> Self {
        Self {
            departments,
            employees,
        }
    }
}

impl<D, E> EmployeeMapper for RepositoryEmployeeMapper<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    fn to_entity(&self, request: &EmployeeRequest) -> MapperResult<Employee> {
        let department = self
            .departments
            .find_by_id(request.department_id)?
            .ok_or(MapperError::DepartmentNotFound(request.department_id))?;

        let manager = match request.manager_id {
            Some(manager_id) => Some(
                self.employees
                    .find_by_id(manager_id)?
                    .and_then(|manager| manager.as_ref_for_manager())
                    .ok_or(MapperError::ManagerNotFound(manager_id))?,
            ),
            None => None,
        };

        let mut employee = Employee::new(
            request.name.clone(),
            request.position.clone(),
            request.salary,
            department,
        );
        employee.manager = manager;
        Ok(employee)
    }

    fn to_response(&self, employee: &Employee) -> MapperResult<EmployeeResponse> {
        let id = employee.id.ok_or(MapperError::Unsaved)?;
        Ok(EmployeeResponse {
            id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            salary: employee.salary,
            department_name: employee.department.name.clone(),
            manager_name: employee
                .manager
                .as_ref()
                .map_or_else(|| NO_MANAGER_PLACEHOLDER.to_string(), |m| m.name.clone()),
        })
    }
}
