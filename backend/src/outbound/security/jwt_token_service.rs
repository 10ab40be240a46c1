//! HS256 JSON Web Token adapter for [`TokenService`].
//!
//! Expiry is checked against an injected clock with zero leeway, so a token
//! is valid strictly before its `exp` second and invalid from then on.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use tracing::debug;

use crate::domain::TokenClaims;
use crate::domain::ports::{TokenError, TokenService};

/// Token service signing claims with a shared HMAC-SHA256 secret.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    has_secret: bool,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    /// Create a service for `secret`. An empty secret refuses every operation.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            has_secret: !secret.is_empty(),
            clock,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        if !self.has_secret {
            return Err(TokenError::signing("signing secret is empty"));
        }
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|err| TokenError::signing(err.to_string()))
    }

    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if !self.has_secret {
            return Err(TokenError::invalid());
        }
        let claims = decode::<TokenClaims>(token, &self.decoding, &Self::validation())
            .map_err(|err| {
                debug!(error = %err, "bearer token rejected");
                TokenError::invalid()
            })?
            .claims;
        if claims.is_expired_at(self.clock.utc()) {
            debug!(user_id = claims.user_id, "bearer token expired");
            return Err(TokenError::invalid());
        }
        Ok(claims)
    }
}
