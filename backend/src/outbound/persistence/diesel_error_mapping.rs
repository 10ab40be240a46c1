//! Classification of pool and Diesel failures into [`PersistenceError`].
//!
//! This is the only place that inspects driver errors. Constraint
//! violations are recognised by their typed [`DatabaseErrorKind`], never by
//! message text.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::PersistenceError;

use super::pool::PoolError;

const UNKNOWN_CONSTRAINT: &str = "unknown";

/// Map pool errors to connection failures.
pub(crate) fn map_pool_error(error: PoolError) -> PersistenceError {
    PersistenceError::connection(error.message())
}

/// Map Diesel errors to persistence errors.
pub(crate) fn map_diesel_error(error: DieselError) -> PersistenceError {
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
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            PersistenceError::unique_violation(
                info.constraint_name().unwrap_or(UNKNOWN_CONSTRAINT),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            PersistenceError::foreign_key_violation(
                info.constraint_name().unwrap_or(UNKNOWN_CONSTRAINT),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersistenceError::connection("database connection error")
        }
        DieselError::NotFound => PersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersistenceError::query("database query error"),
        _ => PersistenceError::query("database error"),
    }
}
