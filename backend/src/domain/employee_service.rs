//! Employee domain service.
//!
//! Implements the driving ports on top of the record access port. The rules
//! enforced here:
//!
//! - an email may not be reused when creating an employee;
//! - updates require an existing record and never change its id;
//! - deletes succeed whether or not the record exists.
//!
//! Updates deliberately do not re-check email uniqueness. Concurrent creates
//! with the same email can both pass the lookup; the PostgreSQL unique index
//! is what rejects the second write.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::domain::ports::{
    EmployeeRepository, EmployeeRepositoryError, EmployeesCommand, EmployeesQuery,
};
use crate::domain::{Employee, EmployeeDetails, EmployeeId, Error};

/// Employee service implementing [`EmployeesCommand`] and [`EmployeesQuery`].
///
/// Holds only a shared handle to the repository; no records are cached
/// between calls.
#[derive(Clone)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    fn map_repository_error(error: EmployeeRepositoryError) -> Error {
        match error {
            EmployeeRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("employee repository unavailable: {message}"))
            }
            EmployeeRepositoryError::Query { message } => {
                Error::internal(format!("employee repository error: {message}"))
            }
            EmployeeRepositoryError::DuplicateEmail { email } => Self::duplicate_email(&email),
        }
    }

    fn duplicate_email(email: &str) -> Error {
        Error::conflict(format!("employee already exists with given email: {email}")).with_details(
            json!({
                "field": "email",
                "value": email,
                "code": "duplicate_email",
            }),
        )
    }

    fn missing_employee(id: EmployeeId) -> Error {
        Error::not_found(format!("employee does not exist with id: {id}")).with_details(json!({
            "id": id.get(),
            "code": "employee_not_found",
        }))
    }
}

#[async_trait]
impl<R> EmployeesCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    #[instrument(skip(self, details), fields(email = %details.email))]
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, Error> {
        let existing = self
            .repository
            .find_by_email(&details.email)
            .await
            .map_err(Self::map_repository_error)?;
        if existing.is_some() {
            debug!("rejecting duplicate email");
            return Err(Self::duplicate_email(&details.email));
        }

        let employee = self
            .repository
            .create(&details)
            .await
            .map_err(Self::map_repository_error)?;
        info!(employee_id = %employee.id(), "employee created");
        Ok(employee)
    }

    #[instrument(skip(self, details), fields(employee_id = %id))]
    async fn update(&self, id: EmployeeId, details: EmployeeDetails) -> Result<Employee, Error> {
        let mut employee = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::missing_employee(id))?;

        employee.apply(details);

        let updated = self
            .repository
            .update(&employee)
            .await
            .map_err(Self::map_repository_error)?
            // The row can disappear between the lookup and the write.
            .ok_or_else(|| Self::missing_employee(id))?;
        info!("employee updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(employee_id = %id))]
    async fn delete(&self, id: EmployeeId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(removed, "employee delete processed");
        Ok(())
    }
}

#[async_trait]
impl<R> EmployeesQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list(&self) -> Result<Vec<Employee>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, Error> {
        self.repository
            .find_by_first_and_last_name(first_name, last_name)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
