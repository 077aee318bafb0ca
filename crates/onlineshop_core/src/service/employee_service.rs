//! Employee CRUD use-case service.
//!
//! # Responsibility
//! - Check employee existence before reads and mutations.
//! - Convert between transfer objects and entities through the mapper.
//! - Delegate persistence to the repository.
//!
//! # Invariants
//! - Updates overwrite only name, position and salary; department and
//!   manager stay as created.
//! - `delete_by_id` is never issued for an id that failed the lookup.
//! - The mapper is not consulted when a lookup fails.

use crate::dto::employee::{EmployeeRequest, EmployeeResponse};
use crate::mapper::employee_mapper::EmployeeMapper;
use crate::mapper::MapperError;
use crate::model::department::DepartmentId;
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// No employee with this id is stored.
    EmployeeNotFound(EmployeeId),
    /// Create request references an unknown department.
    DepartmentNotFound(DepartmentId),
    /// Create request references an unknown manager.
    ManagerNotFound(EmployeeId),
    /// Entity could not be rendered as a response.
    Mapping(&'static str),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::DepartmentNotFound(id) => write!(f, "department not found: {id}"),
            Self::ManagerNotFound(id) => write!(f, "manager not found: {id}"),
            Self::Mapping(details) => write!(f, "employee mapping failed: {details}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<MapperError> for ServiceError {
    fn from(value: MapperError) -> Self {
        match value {
            MapperError::DepartmentNotFound(id) => Self::DepartmentNotFound(id),
            MapperError::ManagerNotFound(id) => Self::ManagerNotFound(id),
            MapperError::Unsaved => Self::Mapping("employee has no id"),
            MapperError::Repo(err) => Self::Repo(err),
        }
    }
}

/// Employee service facade over a repository and a mapper.
pub struct EmployeeService<R, M> {
    repo: R,
    mapper: M,
}

impl<R, M> EmployeeService<R, M>
where
    R: EmployeeRepository,
    M: EmployeeMapper,
{
    pub fn new(repo: R, mapper: M) -> Self {
        Self { repo, mapper }
    }

    /// Returns every stored employee in repository order.
    pub fn get_all_employees(&self) -> ServiceResult<Vec<EmployeeResponse>> {
        let employees = self.repo.find_all()?;
        let responses = employees
            .iter()
            .map(|employee| self.mapper.to_response(employee))
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "event=employee_list module=service status=ok count={}",
            responses.len()
        );
        Ok(responses)
    }

    /// Returns one employee by id.
    ///
    /// # Errors
    /// - `EmployeeNotFound` when the id is unknown.
    pub fn get_employee_by_id(&self, id: EmployeeId) -> ServiceResult<EmployeeResponse> {
        let employee = self.find_existing(id, "employee_get")?;
        Ok(self.mapper.to_response(&employee)?)
    }

    /// Maps, persists and renders a new employee.
    ///
    /// A missing `manager_id` yields a response carrying the no-manager
    /// placeholder.
    pub fn create_employee(&self, request: &EmployeeRequest) -> ServiceResult<EmployeeResponse> {
        let employee = self.mapper.to_entity(request)?;
        let saved = self.repo.save(&employee)?;
        let response = self.mapper.to_response(&saved)?;
        info!(
            "event=employee_create module=service status=ok employee_id={} has_manager={}",
            response.id,
            saved.manager.is_some()
        );
        Ok(response)
    }

    /// Overwrites name, position and salary of an existing employee.
    ///
    /// `department_id` and `manager_id` in the request are ignored.
    ///
    /// # Errors
    /// - `EmployeeNotFound` when the id is unknown; nothing is saved.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        request: &EmployeeRequest,
    ) -> ServiceResult<EmployeeResponse> {
        let mut employee = self.find_existing(id, "employee_update")?;
        apply_core_fields(&mut employee, request);

        let saved = self.repo.save(&employee)?;
        info!("event=employee_update module=service status=ok employee_id={id}");
        Ok(self.mapper.to_response(&saved)?)
    }

    /// Deletes an existing employee.
    ///
    /// # Errors
    /// - `EmployeeNotFound` when the id is unknown; no delete is issued.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        self.find_existing(id, "employee_delete")?;
        self.repo.delete_by_id(id)?;
        info!("event=employee_delete module=service status=ok employee_id={id}");
        Ok(())
    }

    fn find_existing(&self, id: EmployeeId, event: &'static str) -> ServiceResult<Employee> {
        match self.repo.find_by_id(id)? {
            Some(employee) => Ok(employee),
            None => {
                warn!(
                    "event={event} module=service status=error error_code=employee_not_found employee_id={id}"
                );
                Err(ServiceError::EmployeeNotFound(id))
            }
        }
    }
}

fn apply_core_fields(employee: &mut Employee, request: &EmployeeRequest) {
    employee.name = request.name.clone();
    employee.position = request.position.clone();
    employee.salary = request.salary;
}

#[cfg(test)]
mod tests {
    use super::{EmployeeService, ServiceError};
    use crate::dto::employee::{EmployeeRequest, EmployeeResponse};
    use crate::mapper::employee_mapper::{MockEmployeeMapper, NO_MANAGER_PLACEHOLDER};
    use crate::mapper::MapperError;
    use crate::model::department::Department;
    use crate::model::employee::{Employee, EmployeeRef};
    use crate::repo::employee_repo::MockEmployeeRepository;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn department() -> Department {
        Department::new(1, "IT")
    }

    fn manager() -> EmployeeRef {
        EmployeeRef::new(2, "Jane Manager")
    }

    fn employee() -> Employee {
        Employee {
            id: Some(1),
            name: "Jane Doe".to_string(),
            position: "Developer".to_string(),
            salary: 100_000,
            department: department(),
            manager: Some(manager()),
        }
    }

    fn response() -> EmployeeResponse {
        EmployeeResponse {
            id: 1,
            name: "Jane Doe".to_string(),
            position: "Developer".to_string(),
            salary: 100_000,
            department_name: "IT".to_string(),
            manager_name: "Jane Manager".to_string(),
        }
    }

    fn request() -> EmployeeRequest {
        EmployeeRequest {
            name: "Jane Doe".to_string(),
            position: "Developer".to_string(),
            salary: 100_000,
            department_id: 1,
            manager_id: Some(2),
        }
    }

    fn existing(name: &str, position: &str, salary: i64) -> Employee {
        Employee {
            id: Some(1),
            name: name.to_string(),
            position: position.to_string(),
            salary,
            department: department(),
            manager: Some(manager()),
        }
    }

    #[test]
    fn get_all_employees_returns_one_response_per_entity() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![employee()]));
        let mut mapper = MockEmployeeMapper::new();
        mapper
            .expect_to_response()
            .withf(|entity| *entity == employee())
            .times(1)
            .returning(|_| Ok(response()));

        let service = EmployeeService::new(repo, mapper);
        let result = service.get_all_employees().unwrap();

        assert_eq!(result, vec![response()]);
    }

    #[test]
    fn get_all_employees_preserves_repository_order() {
        let mut second = employee();
        second.id = Some(5);
        second.name = "John Roe".to_string();
        let entities = vec![employee(), second];

        let mut repo = MockEmployeeRepository::new();
        let stored = entities.clone();
        repo.expect_find_all().returning(move || Ok(stored.clone()));
        let mut mapper = MockEmployeeMapper::new();
        mapper.expect_to_response().times(2).returning(|entity| {
            let mut rendered = response();
            rendered.id = entity.id.unwrap_or_default();
            rendered.name = entity.name.clone();
            Ok(rendered)
        });

        let service = EmployeeService::new(repo, mapper);
        let result = service.get_all_employees().unwrap();

        let ids: Vec<_> = result.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(result[1].name, "John Roe");
    }

    #[test]
    fn get_all_employees_on_empty_store_never_maps() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all().times(1).returning(|| Ok(Vec::new()));
        let mut mapper = MockEmployeeMapper::new();
        mapper.expect_to_response().never();
        mapper.expect_to_entity().never();

        let service = EmployeeService::new(repo, mapper);
        assert!(service.get_all_employees().unwrap().is_empty());
    }

    #[test]
    fn get_employee_by_id_returns_mapped_response() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(employee())));
        let mut mapper = MockEmployeeMapper::new();
        mapper
            .expect_to_response()
            .withf(|entity| *entity == employee())
            .times(1)
            .returning(|_| Ok(response()));

        let service = EmployeeService::new(repo, mapper);
        assert_eq!(service.get_employee_by_id(1).unwrap(), response());
    }

    #[test]
    fn get_employee_by_id_missing_fails_without_mapping() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(None));
        let mut mapper = MockEmployeeMapper::new();
        mapper.expect_to_response().never();

        let service = EmployeeService::new(repo, mapper);
        let err = service.get_employee_by_id(1).unwrap_err();
        assert!(matches!(err, ServiceError::EmployeeNotFound(1)));
    }

    #[test]
    fn create_employee_maps_saves_and_renders_in_order() {
        let mut seq = Sequence::new();
        let mut repo = MockEmployeeRepository::new();
        let mut mapper = MockEmployeeMapper::new();

        mapper
            .expect_to_entity()
            .withf(|req| *req == request())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                let mut unsaved = employee();
                unsaved.id = None;
                Ok(unsaved)
            });
        repo.expect_save()
            .withf(|entity| entity.id.is_none() && entity.name == "Jane Doe")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(employee()));
        mapper
            .expect_to_response()
            .withf(|entity| *entity == employee())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response()));

        let service = EmployeeService::new(repo, mapper);
        let result = service.create_employee(&request()).unwrap();

        assert_eq!(result, response());
        assert_eq!(result.department_name, "IT");
        assert_eq!(result.manager_name, "Jane Manager");
    }

    #[test]
    fn create_employee_without_manager_returns_placeholder() {
        let mut without_manager = request();
        without_manager.manager_id = None;
        let mut entity = employee();
        entity.manager = None;
        let mut rendered = response();
        rendered.manager_name = NO_MANAGER_PLACEHOLDER.to_string();

        let mut mapper = MockEmployeeMapper::new();
        let unsaved = entity.clone();
        mapper
            .expect_to_entity()
            .times(1)
            .returning(move |_| Ok(unsaved.clone()));
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save()
            .withf(|entity| entity.manager.is_none())
            .times(1)
            .returning(|entity| Ok(entity.clone()));
        mapper
            .expect_to_response()
            .times(1)
            .returning(move |_| Ok(rendered.clone()));

        let service = EmployeeService::new(repo, mapper);
        let result = service.create_employee(&without_manager).unwrap();

        assert_eq!(result.manager_name, "Нет менеджера");
    }

    #[test]
    fn create_employee_with_unknown_department_never_saves() {
        let mut mapper = MockEmployeeMapper::new();
        mapper
            .expect_to_entity()
            .returning(|req| Err(MapperError::DepartmentNotFound(req.department_id)));
        mapper.expect_to_response().never();
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save().never();

        let service = EmployeeService::new(repo, mapper);
        let err = service.create_employee(&request()).unwrap_err();
        assert!(matches!(err, ServiceError::DepartmentNotFound(1)));
    }

    #[test]
    fn update_employee_overwrites_core_fields() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(existing("Old Name", "Old Position", 50_000))));
        repo.expect_save()
            .withf(|entity| {
                entity.id == Some(1)
                    && entity.name == "Jane Doe"
                    && entity.position == "Developer"
                    && entity.salary == 100_000
            })
            .times(1)
            .returning(|entity| Ok(entity.clone()));
        let mut mapper = MockEmployeeMapper::new();
        mapper
            .expect_to_response()
            .withf(|entity| entity.name == "Jane Doe")
            .times(1)
            .returning(|_| Ok(response()));
        mapper.expect_to_entity().never();

        let service = EmployeeService::new(repo, mapper);
        assert_eq!(service.update_employee(1, &request()).unwrap(), response());
    }

    #[test]
    fn update_employee_keeps_department_and_manager() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(existing("Old Name", "Old Position", 50_000))));
        repo.expect_save()
            .withf(|entity| {
                entity.department == department() && entity.manager == Some(manager())
            })
            .times(1)
            .returning(|entity| Ok(entity.clone()));
        let mut mapper = MockEmployeeMapper::new();
        mapper
            .expect_to_response()
            .times(1)
            .returning(|_| Ok(response()));

        let mut moved = request();
        moved.department_id = 99;
        moved.manager_id = Some(99);

        let service = EmployeeService::new(repo, mapper);
        service.update_employee(1, &moved).unwrap();
    }

    #[test]
    fn update_employee_applies_new_salary() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(existing("Jane Doe", "Developer", 50_000))));
        repo.expect_save()
            .withf(|entity| entity.salary == 100_000)
            .times(1)
            .returning(|entity| Ok(entity.clone()));
        let mut mapper = MockEmployeeMapper::new();
        mapper
            .expect_to_response()
            .times(1)
            .returning(|_| Ok(response()));

        let service = EmployeeService::new(repo, mapper);
        service.update_employee(1, &request()).unwrap();
    }

    #[test]
    fn update_employee_missing_fails_before_save() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save().never();
        let mut mapper = MockEmployeeMapper::new();
        mapper.expect_to_response().never();
        mapper.expect_to_entity().never();

        let service = EmployeeService::new(repo, mapper);
        let err = service.update_employee(1, &request()).unwrap_err();
        assert!(matches!(err, ServiceError::EmployeeNotFound(1)));
    }

    #[test]
    fn delete_employee_checks_then_deletes() {
        let mut seq = Sequence::new();
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(employee())));
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = EmployeeService::new(repo, MockEmployeeMapper::new());
        service.delete_employee(1).unwrap();
    }

    #[test]
    fn delete_employee_missing_never_deletes() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_delete_by_id().never();

        let service = EmployeeService::new(repo, MockEmployeeMapper::new());
        let err = service.delete_employee(1).unwrap_err();
        assert!(matches!(err, ServiceError::EmployeeNotFound(1)));
    }
}
