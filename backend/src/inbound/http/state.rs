//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeRepository, EmployeesCommand, EmployeesQuery};
use crate::domain::EmployeeService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeesCommand>,
    pub employees_query: Arc<dyn EmployeesQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        employees: Arc<dyn EmployeesCommand>,
        employees_query: Arc<dyn EmployeesQuery>,
    ) -> Self {
        Self {
            employees,
            employees_query,
        }
    }

    /// Wire both ports to a single [`EmployeeService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employees_backend::inbound::http::state::HttpState;
    /// use employees_backend::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()));
    /// let _query = state.employees_query.clone();
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: EmployeeRepository + 'static,
    {
        let service = Arc::new(EmployeeService::new(repository));
        Self {
            employees: service.clone(),
            employees_query: service,
        }
    }
}
