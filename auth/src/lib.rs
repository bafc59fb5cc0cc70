//! Credential primitives for the single sign-on service.
//!
//! Provides the transport-free building blocks of token issuance:
//! - Password hashing strategies (Argon2id, bcrypt) behind one trait
//! - JWT claims, HS256 encoding/decoding and a per-secret token issuer
//!
//! Storage and business rules (role membership, app lookup) stay in the
//! service; this crate only hashes and signs.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{Argon2Hasher, PasswordHashing};
//!
//! let hasher = Argon2Hasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Issuing a Token
//! ```
//! use auth::{Claims, JwtHandler, TokenIssuer};
//! use chrono::Duration;
//!
//! let claims = Claims::new()
//!     .with_subject("alice")
//!     .with_extra("role", "admin");
//! let token = TokenIssuer::new()
//!     .issue(claims, b"app_secret", Duration::hours(5))
//!     .unwrap();
//!
//! let decoded: Claims = JwtHandler::new(b"app_secret").decode(&token).unwrap();
//! assert_eq!(decoded.extra_str("role"), Some("admin"));
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use password::Argon2Hasher;
pub use password::BcryptHasher;
pub use password::HashingAlgorithm;
pub use password::HashingOptions;
pub use password::PasswordError;
pub use password::PasswordHashing;
