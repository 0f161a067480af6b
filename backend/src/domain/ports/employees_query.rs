//! Driving port for employee reads.
//!
//! Misses are reported as `None`, never as errors; adapters decide how to
//! render an absent record.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Use-case port for reads against the employee directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// Every stored employee, in storage order.
    async fn list(&self) -> Result<Vec<Employee>, Error>;

    /// The employee with `id`, if present.
    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>, Error>;

    /// The employee whose first and last name both match exactly.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, Error>;
}
