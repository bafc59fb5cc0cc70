use crate::domain::credentials::Name;
use crate::domain::credentials::Password;
use crate::domain::credentials::PasswordHash;

/// Principal of the single-secret login flow.
#[derive(Debug, Clone)]
pub struct User {
    pub name: Name,
    pub password_hash: PasswordHash,
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: Name,
    pub password: Password,
}

impl RegisterUserCommand {
    pub fn new(name: Name, password: Password) -> Self {
        Self { name, password }
    }
}

/// Command to log a user in with validated fields
#[derive(Debug)]
pub struct LoginCommand {
    pub name: Name,
    pub password: Password,
}

impl LoginCommand {
    pub fn new(name: Name, password: Password) -> Self {
        Self { name, password }
    }
}
