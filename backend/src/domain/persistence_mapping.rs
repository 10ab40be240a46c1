//! Translation from repository failures to the domain error taxonomy.

use tracing::error;

use crate::domain::Error;
use crate::domain::ports::PersistenceError;

/// Message returned for any persistence failure the caller cannot fix.
pub const DATABASE_FAILURE_MESSAGE: &str = "Unexpected error from database";

/// Map a repository failure for an entity whose unique column is `unique_key`.
///
/// Unique and foreign-key violations are caller errors; every other failure
/// is logged with its detail and reported with a fixed message.
pub(crate) fn map_persistence_error(error: PersistenceError, unique_key: Option<&str>) -> Error {
    match (error, unique_key) {
        (PersistenceError::UniqueViolation { .. }, Some(key)) => {
            Error::bad_request(format!("key {key} duplicate value"))
        }
        (PersistenceError::ForeignKeyViolation { constraint }, _) => {
            Error::bad_request(foreign_key_message(&constraint))
        }
        (other, _) => {
            error!(error = %other, "persistence operation failed");
            Error::unexpected(DATABASE_FAILURE_MESSAGE)
        }
    }
}

fn foreign_key_message(constraint: &str) -> String {
    // Postgres names single-column foreign keys `<table>_<column>_fkey`.
    match constraint.strip_suffix("_fkey") {
        Some("books_author_id") => {
            "key author_id does not reference an existing author".to_owned()
        }
        _ => "referenced record does not exist".to_owned(),
    }
}
