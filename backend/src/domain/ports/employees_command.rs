//! Driving port for employee mutations.
//!
//! Inbound adapters call [`EmployeesCommand`] to create, update and delete
//! employees without depending on how records are stored.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDetails, EmployeeId, Error};

/// Use-case port for writes against the employee directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    /// Register a new employee.
    ///
    /// Fails with [`crate::domain::ErrorCode::Conflict`] when the email is
    /// already in use; nothing is written in that case.
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, Error>;

    /// Overwrite the fields of an existing employee.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn update(&self, id: EmployeeId, details: EmployeeDetails) -> Result<Employee, Error>;

    /// Remove an employee. Deleting an unknown id succeeds.
    async fn delete(&self, id: EmployeeId) -> Result<(), Error>;
}
