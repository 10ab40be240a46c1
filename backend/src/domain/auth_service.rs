//! Login: credential check followed by token issuance.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::credentials::{INVALID_CREDENTIALS_MESSAGE, compare_password};
use crate::domain::persistence_mapping::map_persistence_error;
use crate::domain::ports::{LoginService, PasswordHasher, TokenService, UserRepository};
use crate::domain::{AccessToken, Error, LoginCredentials, TokenClaims};

/// Message returned when a token cannot be signed.
pub const TOKEN_FAILURE_MESSAGE: &str = "unexpected error while creating token";

/// Authentication service implementing [`LoginService`].
#[derive(Clone)]
pub struct AuthService<R> {
    repository: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    clock: Arc<dyn Clock>,
}

impl<R> AuthService<R> {
    /// Create a new service. `clock` supplies the token issue time.
    pub fn new(
        repository: Arc<R>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            clock,
        }
    }
}

#[async_trait]
impl<R> LoginService for AuthService<R>
where
    R: UserRepository,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error> {
        let user = self
            .repository
            .find_by_email(credentials.email())
            .await
            .map_err(|err| map_persistence_error(err, None))?
            .ok_or_else(|| Error::authentication(INVALID_CREDENTIALS_MESSAGE))?;

        compare_password(&self.hasher, &user.password_hash, credentials.password()).await?;

        let claims = TokenClaims::for_user(&user, self.clock.utc());
        let token = self.tokens.issue(&claims).map_err(|err| {
            error!(error = %err, user_id = user.id, "token issuance failed");
            Error::unexpected(TOKEN_FAILURE_MESSAGE)
        })?;
        info!(user_id = user.id, "user logged in");
        Ok(AccessToken::new(token))
    }
}
