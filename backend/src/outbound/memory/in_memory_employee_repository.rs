//! In-memory implementation of [`EmployeeRepository`].
//!
//! Records live in a `BTreeMap` keyed by id, so iteration order matches id
//! order just like the PostgreSQL adapter's `ORDER BY id`. Ids come from a
//! counter that never rewinds, so deleted ids are not reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDetails, EmployeeId};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<EmployeeId, EmployeeDetails>,
}

impl Store {
    fn email_taken(&self, email: &str, except: Option<EmployeeId>) -> bool {
        self.rows
            .iter()
            .any(|(id, row)| Some(*id) != except && row.email == email)
    }
}

/// Process-local employee store.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    store: Mutex<Store>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, details: &EmployeeDetails) -> Result<Employee, EmployeeRepositoryError> {
        let mut store = self.store.lock().await;
        // Mirrors the unique index on the PostgreSQL table.
        if store.email_taken(&details.email, None) {
            return Err(EmployeeRepositoryError::duplicate_email(
                details.email.clone(),
            ));
        }

        store.last_id += 1;
        let id = EmployeeId::new(store.last_id);
        store.rows.insert(id, details.clone());
        debug!(employee_id = %id, "stored employee in memory");
        Ok(Employee::new(id, details.clone()))
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .rows
            .get(&id)
            .map(|details| Employee::new(id, details.clone())))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .rows
            .iter()
            .map(|(id, details)| Employee::new(*id, details.clone()))
            .collect())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .rows
            .iter()
            .find(|(_, details)| details.email == email)
            .map(|(id, details)| Employee::new(*id, details.clone())))
    }

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .rows
            .iter()
            .find(|(_, details)| details.first_name == first_name && details.last_name == last_name)
            .map(|(id, details)| Employee::new(*id, details.clone())))
    }

    async fn update(
        &self,
        employee: &Employee,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut store = self.store.lock().await;
        if !store.rows.contains_key(&employee.id()) {
            return Ok(None);
        }
        if store.email_taken(employee.email(), Some(employee.id())) {
            return Err(EmployeeRepositoryError::duplicate_email(
                employee.email().to_owned(),
            ));
        }

        store.rows.insert(employee.id(), employee.details().clone());
        Ok(Some(employee.clone()))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut store = self.store.lock().await;
        Ok(store.rows.remove(&id).is_some())
    }
}
