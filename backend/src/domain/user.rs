//! User accounts and password material.

use std::fmt;

use zeroize::Zeroizing;

/// One-way password hash as persisted; never the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a password hasher.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Stored user identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: PasswordHash,
}

/// User record ready for insertion; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: PasswordHash,
}

/// Validated signup input carrying the plaintext password until it is hashed.
///
/// # Examples
/// ```
/// use bookshelf::domain::Registration;
///
/// let registration = Registration::new("Ada Lovelace", "ada@example.com", "engine-1843");
/// assert_eq!(registration.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Capture signup fields, trimming the name and email.
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Display name for the new account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Unique email for the new account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password to be hashed before storage.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Storage record for this registration using an already computed hash.
    pub fn into_new_user(self, password_hash: PasswordHash) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            password_hash,
        }
    }
}
