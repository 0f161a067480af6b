//! Diesel table definitions for the PostgreSQL schema.
//!
//! Kept in sync with `backend/migrations` by hand; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Employee directory.
    ///
    /// `email` carries the `employees_email_key` unique constraint.
    employees (id) {
        /// Primary key assigned from a BIGSERIAL sequence.
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
    }
}
