//! Authentication primitives: login credentials and bearer token claims.
//!
//! Inbound adapters validate payload shape before building these values, so
//! constructors here only normalise and never reject.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::User;

/// Lifetime of an access token, in seconds, from the moment it is issued.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Login credentials captured from a sign-in request.
///
/// # Examples
/// ```
/// use bookshelf::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new(" ada@example.com ", "s3cret-pass");
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.password(), "s3cret-pass");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Build credentials, trimming the email but keeping the password as typed.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Email used for the user lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Identity claims carried inside a signed bearer token.
///
/// Claims are signed, not encrypted; anyone holding the token can read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Identifier of the authenticated user.
    pub user_id: i64,
    /// Email of the authenticated user.
    pub email: String,
    /// Display name of the authenticated user.
    pub name: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Claims for `user` expiring [`ACCESS_TOKEN_TTL_SECS`] after `issued_at`.
    ///
    /// # Examples
    /// ```
    /// use bookshelf::domain::{PasswordHash, TokenClaims, User};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let user = User {
    ///     id: 7,
    ///     name: "Ada".into(),
    ///     email: "ada@example.com".into(),
    ///     password_hash: PasswordHash::new("$2b$04$hash"),
    /// };
    /// let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    /// let claims = TokenClaims::for_user(&user, now);
    /// assert_eq!(claims.exp, now.timestamp() + 15 * 60);
    /// ```
    pub fn for_user(user: &User, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            exp: (issued_at + TimeDelta::seconds(ACCESS_TOKEN_TTL_SECS)).timestamp(),
        }
    }

    /// Whether the token has reached its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Signed bearer token returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap an encoded token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Encoded token string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the wrapper.
    pub fn into_inner(self) -> String {
        self.0
    }
}
