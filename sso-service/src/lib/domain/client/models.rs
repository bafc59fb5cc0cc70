use std::fmt;

use crate::domain::credentials::Name;
use crate::domain::credentials::PasswordHash;

/// Client unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub i64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Principal that requests role-scoped tokens for apps.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: Name,
    pub password_hash: PasswordHash,
}

/// Client not yet persisted.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: Name,
    pub password_hash: PasswordHash,
}

impl NewClient {
    /// Attach the identifier assigned by storage.
    pub fn with_id(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            password_hash: self.password_hash,
        }
    }
}
