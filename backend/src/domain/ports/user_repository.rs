//! Port abstraction for user persistence adapters.
use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::PersistenceError;

/// Storage for user accounts. Soft-deleted users are invisible.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored record.
    ///
    /// A duplicate email yields [`PersistenceError::UniqueViolation`].
    async fn create(&self, user: &NewUser) -> Result<User, PersistenceError>;

    /// Fetch a live user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PersistenceError>;
}
