//! bcrypt-backed [`PasswordHasher`].

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor used in production.
pub const DEFAULT_BCRYPT_COST: u32 = 14;

/// Password hasher using bcrypt with a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given work factor (valid range 4 to 31).
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured work factor.
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError> {
        bcrypt::hash(plaintext, self.cost)
            .map(PasswordHash::new)
            .map_err(|err| PasswordHashError::hashing(err.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        bcrypt::verify(plaintext, hash.as_str()).map_err(|_| PasswordHashError::malformed_hash())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    // Lowest cost bcrypt accepts; keeps the suite fast.
    const TEST_COST: u32 = 4;

    #[fixture]
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(TEST_COST)
    }

    #[rstest]
    fn default_cost_is_fourteen() {
        assert_eq!(BcryptPasswordHasher::default().cost(), 14);
    }

    #[rstest]
    #[case("seven77")]
    #[case("correct horse battery staple")]
    fn hash_never_equals_plaintext_and_verifies(
        hasher: BcryptPasswordHasher,
        #[case] plaintext: &str,
    ) {
        let hash = hasher.hash(plaintext).expect("hash");
        assert_ne!(hash.as_str(), plaintext);
        assert!(hasher.verify(plaintext, &hash).expect("verify"));
        assert!(!hasher.verify("something-else", &hash).expect("verify"));
    }

    #[rstest]
    fn salts_differ_between_hashes(hasher: BcryptPasswordHasher) {
        let first = hasher.hash("repeatable").expect("hash");
        let second = hasher.hash("repeatable").expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    fn cost_outside_range_fails() {
        let err = BcryptPasswordHasher::new(3)
            .hash("password")
            .expect_err("cost rejected");
        assert!(matches!(err, PasswordHashError::Hashing { .. }));
    }

    #[rstest]
    fn malformed_hash_is_reported(hasher: BcryptPasswordHasher) {
        let err = hasher
            .verify("password", &PasswordHash::new("not-a-bcrypt-hash"))
            .expect_err("malformed");
        assert_eq!(err, PasswordHashError::malformed_hash());
    }
}
