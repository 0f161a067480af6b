//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! A thin translator between [`EmployeeRow`] and [`Employee`]. Email
//! uniqueness is backed by the `employees_email_key` constraint; violations
//! surface as [`EmployeeRepositoryError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDetails, EmployeeId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, map_write_error};
use super::models::{EmployeeRow, EmployeeUpdate, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel-backed implementation of the [`EmployeeRepository`] port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn create(&self, details: &EmployeeDetails) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(NewEmployeeRow::from(details))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_write_error(&details.email))?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .filter(employees::email.eq(email))
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .filter(employees::first_name.eq(first_name))
            .filter(employees::last_name.eq(last_name))
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn update(
        &self,
        employee: &Employee,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = diesel::update(employees::table.find(employee.id().get()))
            .set(EmployeeUpdate::from(employee))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_write_error(employee.email()))?;

        Ok(row.map(Employee::from))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
