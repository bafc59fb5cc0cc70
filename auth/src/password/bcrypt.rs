use super::errors::PasswordError;
use super::PasswordHashing;

/// Bcrypt password hashing.
///
/// Produces `$2b$` modular crypt strings. Bcrypt only looks at the first
/// 72 bytes of its input, so longer passwords are refused instead of being
/// silently truncated.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Work factor used by [`BcryptHasher::new`].
    pub const DEFAULT_COST: u32 = 12;

    /// Longest password, in bytes, that bcrypt hashes without truncation.
    pub const MAX_PASSWORD_BYTES: usize = 72;

    pub fn new() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit work factor.
    ///
    /// # Errors
    /// * `InvalidParameters` - Cost is outside 4..=31
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        if !(4..=31).contains(&cost) {
            return Err(PasswordError::InvalidParameters(format!(
                "bcrypt cost must be between 4 and 31, got {}",
                cost
            )));
        }

        Ok(Self { cost })
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHashing for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.len() > Self::MAX_PASSWORD_BYTES {
            return Err(PasswordError::HashingFailed(format!(
                "password exceeds {} bytes",
                Self::MAX_PASSWORD_BYTES
            )));
        }

        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let matches = bcrypt::verify(password, hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        // No stored hash was produced from an over-long password.
        Ok(matches && password.len() <= Self::MAX_PASSWORD_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptHasher::with_cost(4).expect("Failed to build hasher");
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$2b$04$"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = BcryptHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_with_cost_bounds() {
        assert!(BcryptHasher::with_cost(3).is_err());
        assert!(BcryptHasher::with_cost(32).is_err());
        assert!(BcryptHasher::with_cost(4).is_ok());
    }

    #[test]
    fn test_hash_rejects_password_over_limit() {
        let hasher = BcryptHasher::with_cost(4).expect("Failed to build hasher");
        let password = "a".repeat(BcryptHasher::MAX_PASSWORD_BYTES + 1);

        assert!(matches!(
            hasher.hash(&password),
            Err(PasswordError::HashingFailed(_))
        ));
    }

    #[test]
    fn test_verify_rejects_suffix_past_limit() {
        let hasher = BcryptHasher::with_cost(4).expect("Failed to build hasher");
        let password = "a".repeat(BcryptHasher::MAX_PASSWORD_BYTES);
        let hash = hasher.hash(&password).expect("Failed to hash password");
        let extended = format!("{}x", password);

        assert!(hasher
            .verify(&password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify(&extended, &hash)
            .expect("Failed to verify password"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Lengths range past the 72-byte limit.
        #[test]
        fn test_round_trip_random_passwords(password in "\\PC{1,100}") {
            let hasher = BcryptHasher::with_cost(4).unwrap();
            let extended = format!("{}x", password);

            if password.len() > BcryptHasher::MAX_PASSWORD_BYTES {
                prop_assert!(hasher.hash(&password).is_err());
            } else {
                let hash = hasher.hash(&password).unwrap();
                prop_assert!(hasher.verify(&password, &hash).unwrap());
                prop_assert!(!hasher.verify(&extended, &hash).unwrap());
            }
        }
    }
}
