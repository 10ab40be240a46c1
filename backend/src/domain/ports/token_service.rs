//! Port for signing and verifying bearer tokens.

use crate::domain::TokenClaims;

use super::define_port_error;

define_port_error! {
    /// Token failures. Validation never says why a token was rejected.
    pub enum TokenError {
        /// Signing failed, for example because no secret is configured.
        Signing { message: String } => "token signing failed: {message}",
        /// Malformed, tampered, or expired token.
        Invalid => "invalid or expired token",
    }
}

/// Issues and validates signed access tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Sign `claims` into a compact token.
    fn issue(&self, claims: &TokenClaims) -> Result<String, TokenError>;

    /// Verify signature and expiry, returning the embedded claims.
    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
