use crate::domain::app::models::AppSecret;
use crate::domain::app::models::Role;
use crate::domain::app::models::Roles;
use crate::domain::credentials::Name;
use crate::domain::credentials::Password;

/// Command to register a new client with validated fields
#[derive(Debug)]
pub struct RegisterClientCommand {
    pub name: Name,
    pub password: Password,
}

impl RegisterClientCommand {
    pub fn new(name: Name, password: Password) -> Self {
        Self { name, password }
    }
}

/// Command to register a new app with validated fields
#[derive(Debug)]
pub struct RegisterAppCommand {
    pub name: Name,
    pub secret: AppSecret,
    pub roles: Roles,
}

impl RegisterAppCommand {
    pub fn new(name: Name, secret: AppSecret, roles: Roles) -> Self {
        Self {
            name,
            secret,
            roles,
        }
    }
}

/// Command to issue a role-scoped token for one app
#[derive(Debug)]
pub struct GenerateTokenCommand {
    pub client_name: Name,
    pub password: Password,
    pub app_name: Name,
    pub role: Role,
}

impl GenerateTokenCommand {
    pub fn new(client_name: Name, password: Password, app_name: Name, role: Role) -> Self {
        Self {
            client_name,
            password,
            app_name,
            role,
        }
    }
}
