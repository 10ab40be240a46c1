//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Registers new user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Hash the password and store the account.
    async fn sign_up(&self, registration: Registration) -> Result<User, Error>;
}
