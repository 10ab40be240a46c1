//! Account registration.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::credentials::hash_password;
use crate::domain::persistence_mapping::map_persistence_error;
use crate::domain::ports::{PasswordHasher, SignupService, UserRepository};
use crate::domain::{Error, Registration, User};

/// Registration service implementing [`SignupService`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> UserService<R> {
    /// Create a new service storing users in `repository`.
    pub fn new(repository: Arc<R>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> SignupService for UserService<R>
where
    R: UserRepository,
{
    async fn sign_up(&self, registration: Registration) -> Result<User, Error> {
        let password_hash = hash_password(&self.hasher, registration.password()).await?;
        let new_user = registration.into_new_user(password_hash);
        let user = self
            .repository
            .create(&new_user)
            .await
            .map_err(|err| map_persistence_error(err, Some("email")))?;
        info!(user_id = user.id, "user registered");
        Ok(user)
    }
}
