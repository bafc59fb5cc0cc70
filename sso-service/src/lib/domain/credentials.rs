use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use auth::PasswordHashing;

use crate::domain::errors::NameError;
use crate::domain::errors::PasswordError;

/// How long every issued token stays valid.
pub const TOKEN_VALIDITY_HOURS: i64 = 5;

/// Unique, non-empty name of a user, client or app.
///
/// Names are compared byte for byte: no trimming and no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new valid name.
    ///
    /// # Errors
    /// * `Empty` - Name is the empty string
    pub fn new(name: String) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password as received from a caller. Never stored, never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is the empty string
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Opaque output of the configured hashing strategy.
///
/// Stored and read back unchanged; only the strategy that produced it can
/// interpret it.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}

/// Runs the injected hashing strategy on tokio's blocking pool.
///
/// Hashing is expensive by design. Once started, a hash runs to completion
/// even if the awaiting request is dropped.
#[derive(Clone)]
pub struct CredentialHasher {
    strategy: Arc<dyn PasswordHashing>,
}

impl CredentialHasher {
    pub fn new(strategy: Arc<dyn PasswordHashing>) -> Self {
        Self { strategy }
    }

    /// Hash a password.
    ///
    /// # Errors
    /// Hashing failed or the blocking task panicked
    pub async fn hash(&self, password: &Password) -> anyhow::Result<PasswordHash> {
        let strategy = Arc::clone(&self.strategy);
        let password = password.as_str().to_owned();

        let hash = tokio::task::spawn_blocking(move || strategy.hash(&password))
            .await
            .context("password hashing task failed")??;

        Ok(PasswordHash(hash))
    }

    /// Check a password against a stored hash.
    ///
    /// # Errors
    /// The stored hash is malformed or the blocking task panicked
    pub async fn verify(&self, password: &Password, hash: &PasswordHash) -> anyhow::Result<bool> {
        let strategy = Arc::clone(&self.strategy);
        let password = password.as_str().to_owned();
        let hash = hash.as_str().to_owned();

        let matches = tokio::task::spawn_blocking(move || strategy.verify(&password, &hash))
            .await
            .context("password verification task failed")??;

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use auth::Argon2Hasher;

    use super::*;

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(String::new()), Err(NameError::Empty));
    }

    #[test]
    fn test_name_is_kept_verbatim() {
        let name = Name::new(" Alice ".to_string()).expect("Failed to build name");
        assert_eq!(name.as_str(), " Alice ");
    }

    #[test]
    fn test_password_rejects_empty() {
        assert_eq!(Password::new(String::new()), Err(PasswordError::Empty));
    }

    #[test]
    fn test_secrets_are_redacted_in_debug_output() {
        let password = Password::new("hunter2".to_string()).expect("Failed to build password");
        let hash = PasswordHash::new("$argon2id$hash".to_string());

        assert!(!format!("{:?}", password).contains("hunter2"));
        assert!(!format!("{:?}", hash).contains("argon2id"));
    }

    #[tokio::test]
    async fn test_hasher_round_trip() {
        let strategy = Argon2Hasher::with_params(8, 1, 1).expect("Failed to build hasher");
        let hasher = CredentialHasher::new(Arc::new(strategy));
        let password = Password::new("Tr0ub4dor&3".to_string()).expect("Failed to build password");

        let hash = hasher.hash(&password).await.expect("Failed to hash password");
        assert_ne!(hash.as_str(), password.as_str());

        assert!(hasher
            .verify(&password, &hash)
            .await
            .expect("Failed to verify password"));

        let wrong = Password::new("Tr0ub4dor&4".to_string()).expect("Failed to build password");
        assert!(!hasher
            .verify(&wrong, &hash)
            .await
            .expect("Failed to verify password"));
    }

    #[tokio::test]
    async fn test_hasher_reports_malformed_hash() {
        let hasher = CredentialHasher::new(Arc::new(Argon2Hasher::new()));
        let password = Password::new("password".to_string()).expect("Failed to build password");

        let result = hasher
            .verify(&password, &PasswordHash::new("not-a-hash".to_string()))
            .await;
        assert!(result.is_err());
    }
}
