//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories run on `diesel-async` connections checked out of a `bb8`
//! pool. Row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module; adapters translate them into domain types and
//! map every database failure to the port's error type.
//!
//! # Example
//!
//! ```ignore
//! use employees_backend::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! let repo = DieselEmployeeRepository::new(pool);
//! ```

mod diesel_employee_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
