//! Password hashing strategies.
//!
//! Every strategy implements [`PasswordHashing`]. A process picks one
//! implementation at start-up (see [`from_config`]) and hands it around as
//! `Arc<dyn PasswordHashing>`, so callers never branch on the algorithm.

pub mod argon2;
pub mod bcrypt;
pub mod errors;

use std::sync::Arc;

use serde::Deserialize;

pub use self::argon2::Argon2Hasher;
pub use self::bcrypt::BcryptHasher;
pub use self::errors::PasswordError;

/// Capability to turn a plaintext password into an opaque verifiable hash.
///
/// Both operations are CPU-bound and deliberately slow; async callers should
/// run them on a blocking thread.
pub trait PasswordHashing: Send + Sync + 'static {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying algorithm rejected the input
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a hash produced by [`hash`](Self::hash).
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - The stored hash is malformed
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Supported hashing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashingAlgorithm {
    Argon2,
    Bcrypt,
}

/// Tuning knobs for the selected algorithm.
///
/// Fields that do not apply to the chosen algorithm are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HashingOptions {
    pub algorithm: HashingAlgorithm,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default)]
    pub argon2_memory_kib: Option<u32>,
    #[serde(default)]
    pub argon2_iterations: Option<u32>,
    #[serde(default)]
    pub argon2_parallelism: Option<u32>,
}

fn default_bcrypt_cost() -> u32 {
    BcryptHasher::DEFAULT_COST
}

impl Default for HashingOptions {
    fn default() -> Self {
        Self {
            algorithm: HashingAlgorithm::Argon2,
            bcrypt_cost: default_bcrypt_cost(),
            argon2_memory_kib: None,
            argon2_iterations: None,
            argon2_parallelism: None,
        }
    }
}

/// Build the hashing strategy described by `options`.
///
/// Argon2 uses the library defaults unless all three cost parameters are set.
///
/// # Errors
/// * `InvalidParameters` - Cost parameters are out of range for the algorithm
pub fn from_config(options: &HashingOptions) -> Result<Arc<dyn PasswordHashing>, PasswordError> {
    match options.algorithm {
        HashingAlgorithm::Argon2 => {
            let hasher = match (
                options.argon2_memory_kib,
                options.argon2_iterations,
                options.argon2_parallelism,
            ) {
                (Some(memory), Some(iterations), Some(parallelism)) => {
                    Argon2Hasher::with_params(memory, iterations, parallelism)?
                }
                _ => Argon2Hasher::new(),
            };
            Ok(Arc::new(hasher))
        }
        HashingAlgorithm::Bcrypt => Ok(Arc::new(BcryptHasher::with_cost(options.bcrypt_cost)?)),
    }
}
