use std::fmt;

use crate::domain::credentials::Name;
use crate::domain::errors::RoleError;
use crate::domain::errors::SecretError;

/// App unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i64);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Relying party with its own signing secret and the roles it recognizes.
#[derive(Debug, Clone)]
pub struct App {
    pub id: AppId,
    pub name: Name,
    pub secret: AppSecret,
    pub roles: Roles,
}

/// App not yet persisted.
#[derive(Debug, Clone)]
pub struct NewApp {
    pub name: Name,
    pub secret: AppSecret,
    pub roles: Roles,
}

impl NewApp {
    /// Attach the identifier assigned by storage.
    pub fn with_id(self, id: AppId) -> App {
        App {
            id,
            name: self.name,
            secret: self.secret,
            roles: self.roles,
        }
    }
}

/// Key an app's tokens are signed with.
///
/// Stored as given; strength is the registering party's responsibility.
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
    /// # Errors
    /// * `Empty` - Secret is the empty string
    pub fn new(secret: String) -> Result<Self, SecretError> {
        if secret.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(secret))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(***)")
    }
}

/// Opaque role name, matched by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role(String);

impl Role {
    /// # Errors
    /// * `EmptyRole` - Role is the empty string
    pub fn new(role: String) -> Result<Self, RoleError> {
        if role.is_empty() {
            return Err(RoleError::EmptyRole);
        }
        Ok(Self(role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty set of roles an app grants.
///
/// Keeps first-seen order and drops duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roles(Vec<Role>);

impl Roles {
    /// Build a role set from raw strings.
    ///
    /// # Errors
    /// * `NoRoles` - The list is empty
    /// * `EmptyRole` - One of the roles is the empty string
    pub fn new(roles: Vec<String>) -> Result<Self, RoleError> {
        if roles.is_empty() {
            return Err(RoleError::NoRoles);
        }

        let mut unique: Vec<Role> = Vec::with_capacity(roles.len());
        for role in roles {
            let role = Role::new(role)?;
            if !unique.contains(&role) {
                unique.push(role);
            }
        }

        Ok(Self(unique))
    }

    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    /// Roles as plain strings, in storage order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|role| role.0.clone()).collect()
    }
}
