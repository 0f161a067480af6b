//! Diesel and pool error mapping for the employee repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmployeeRepositoryError;

use super::pool::PoolError;

/// Name of the unique constraint on `employees.email`.
pub(crate) const EMAIL_UNIQUE_CONSTRAINT: &str = "employees_email_key";

/// Map pool failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    EmployeeRepositoryError::connection(error.into_message())
}

/// Map Diesel errors raised by reads or by writes that cannot collide on
/// email.
pub(crate) fn map_diesel_error(error: DieselError) -> EmployeeRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EmployeeRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            EmployeeRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeeRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => EmployeeRepositoryError::query("database error"),
        _ => EmployeeRepositoryError::query("database error"),
    }
}

fn is_email_violation(constraint_name: Option<&str>, message: &str) -> bool {
    constraint_name.map_or_else(
        || message.contains(EMAIL_UNIQUE_CONSTRAINT),
        |name| name == EMAIL_UNIQUE_CONSTRAINT,
    )
}

/// Map Diesel errors raised while writing `email`, turning a violation of the
/// email unique constraint into [`EmployeeRepositoryError::DuplicateEmail`].
pub(crate) fn map_write_error(email: &str) -> impl FnOnce(DieselError) -> EmployeeRepositoryError {
    move |error| match &error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if is_email_violation(info.constraint_name(), info.message()) =>
        {
            debug!(%email, "email unique constraint rejected write");
            EmployeeRepositoryError::duplicate_email(email)
        }
        _ => map_diesel_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn unique_violation_on_email_becomes_duplicate() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"employees_email_key\"",
        );

        let mapped = map_write_error("lucas@hotmail.com")(error);

        assert_eq!(
            mapped,
            EmployeeRepositoryError::duplicate_email("lucas@hotmail.com")
        );
    }

    #[rstest]
    fn other_unique_violation_stays_query_error() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"employees_pkey\"",
        );

        let mapped = map_write_error("lucas@hotmail.com")(error);

        assert!(matches!(mapped, EmployeeRepositoryError::Query { .. }));
    }

    #[rstest]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection, "gone"),
        EmployeeRepositoryError::connection("database connection error")
    )]
    #[case(DieselError::NotFound, EmployeeRepositoryError::query("record not found"))]
    #[case(
        database_error(DatabaseErrorKind::SerializationFailure, "retry"),
        EmployeeRepositoryError::query("database error")
    )]
    fn diesel_errors_map_to_port_errors(
        #[case] error: DieselError,
        #[case] expected: EmployeeRepositoryError,
    ) {
        assert_eq!(map_diesel_error(error), expected);
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, EmployeeRepositoryError::connection("timed out"));
    }
}
