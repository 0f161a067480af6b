//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`EmployeesCommand`], [`EmployeesQuery`]) are consumed by
//! inbound adapters; the driven port ([`EmployeeRepository`]) is implemented
//! by outbound persistence adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;
mod employees_command;
mod employees_query;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
#[cfg(test)]
pub use employees_command::MockEmployeesCommand;
pub use employees_command::EmployeesCommand;
#[cfg(test)]
pub use employees_query::MockEmployeesQuery;
pub use employees_query::EmployeesQuery;
