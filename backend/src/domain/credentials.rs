//! Password hashing and comparison on the blocking thread pool.
//!
//! Callers never learn why a comparison failed: a wrong password, a
//! malformed stored hash and a crashed worker all read as bad credentials.

use std::sync::Arc;

use tracing::{error, warn};
use zeroize::Zeroizing;

use crate::domain::ports::PasswordHasher;
use crate::domain::{Error, PasswordHash};

/// Message returned when credentials do not match.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Message returned when a password cannot be hashed.
pub const HASHING_FAILURE_MESSAGE: &str = "Unexpected error while encrypting password";

/// Hash `plaintext`, reporting any failure as [`Error::unexpected`].
pub async fn hash_password(
    hasher: &Arc<dyn PasswordHasher>,
    plaintext: &str,
) -> Result<PasswordHash, Error> {
    let hasher = Arc::clone(hasher);
    let plaintext = Zeroizing::new(plaintext.to_owned());
    match tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await {
        Ok(Ok(hash)) => Ok(hash),
        Ok(Err(err)) => {
            error!(error = %err, "password hashing failed");
            Err(Error::unexpected(HASHING_FAILURE_MESSAGE))
        }
        Err(err) => {
            error!(error = %err, "password hashing task did not complete");
            Err(Error::unexpected(HASHING_FAILURE_MESSAGE))
        }
    }
}

/// Compare `plaintext` with `hash`, reporting any mismatch as
/// [`Error::authentication`].
pub async fn compare_password(
    hasher: &Arc<dyn PasswordHasher>,
    hash: &PasswordHash,
    plaintext: &str,
) -> Result<(), Error> {
    let hasher = Arc::clone(hasher);
    let hash = hash.clone();
    let plaintext = Zeroizing::new(plaintext.to_owned());
    match tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash)).await {
        Ok(Ok(true)) => Ok(()),
        Ok(Ok(false)) => Err(Error::authentication(INVALID_CREDENTIALS_MESSAGE)),
        Ok(Err(err)) => {
            warn!(error = %err, "password verification failed");
            Err(Error::authentication(INVALID_CREDENTIALS_MESSAGE))
        }
        Err(err) => {
            error!(error = %err, "password verification task did not complete");
            Err(Error::authentication(INVALID_CREDENTIALS_MESSAGE))
        }
    }
}
