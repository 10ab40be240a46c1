//! Error type shared by every repository port.

use super::define_port_error;

define_port_error! {
    /// Persistence failures, classified by the adapter that observed them.
    pub enum PersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
        /// A write collided with a unique constraint.
        UniqueViolation { constraint: String } => "unique constraint violated: {constraint}",
        /// A write referenced a row that does not exist.
        ForeignKeyViolation { constraint: String } => "foreign key constraint violated: {constraint}",
    }
}
