//! Record access port for persisted employees.
//!
//! Adapters provide generic create/read/update/delete-by-id plus the two
//! exact-match lookups the domain relies on. They carry no business rules:
//! email uniqueness and existence checks live in
//! [`crate::domain::EmployeeService`].

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDetails, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
        /// Storage rejected a write because the email is already taken.
        DuplicateEmail { email: String } =>
            "employee email already stored: {email}",
    }
}

/// Persistence port for [`Employee`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new record; storage assigns the id.
    async fn create(&self, details: &EmployeeDetails) -> Result<Employee, EmployeeRepositoryError>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Fetch every record in storage order.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Exact-match lookup on email.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Exact-match lookup on both name fields.
    ///
    /// When several rows match, adapters return the one with the lowest id.
    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Overwrite the fields of the record with `employee.id()`.
    ///
    /// Returns `None` when no such record exists.
    async fn update(&self, employee: &Employee)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Remove the record with `id`.
    ///
    /// Returns whether a row was removed; a missing id is not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        EmployeeRepositoryError::connection("refused"),
        "employee repository connection failed: refused"
    )]
    #[case(
        EmployeeRepositoryError::query("syntax"),
        "employee repository query failed: syntax"
    )]
    #[case(
        EmployeeRepositoryError::duplicate_email("lucas@x.com"),
        "employee email already stored: lucas@x.com"
    )]
    fn errors_format_messages(#[case] error: EmployeeRepositoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
