//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it.

use diesel::prelude::*;

use crate::domain::{Employee, EmployeeDetails, EmployeeId};

use super::schema::employees;

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(
            EmployeeId::new(row.id),
            EmployeeDetails {
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
        )
    }
}

/// Insertable struct for creating employee records; the id comes from the
/// sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a EmployeeDetails> for NewEmployeeRow<'a> {
    fn from(details: &'a EmployeeDetails) -> Self {
        Self {
            first_name: &details.first_name,
            last_name: &details.last_name,
            email: &details.email,
        }
    }
}

/// Changeset struct overwriting every mutable employee column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a Employee> for EmployeeUpdate<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            first_name: employee.first_name(),
            last_name: employee.last_name(),
            email: employee.email(),
        }
    }
}
