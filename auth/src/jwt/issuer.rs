use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Signs already-validated claims with a caller-supplied secret.
///
/// The issuer stamps `iat` and `exp` and signs; it never inspects the
/// business meaning of the claims and keeps no state between calls, so one
/// instance can sign for any number of secrets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Issue a signed token valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `claims` - Identity claims (any `iat`/`exp` already set are overwritten)
    /// * `secret` - HMAC key the token is signed with
    /// * `ttl` - Validity window
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, claims: Claims, secret: &[u8], ttl: Duration) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = claims
            .with_issued_at(now.timestamp())
            .with_expiration((now + ttl).timestamp());

        JwtHandler::new(secret).encode(&claims)
    }
}
