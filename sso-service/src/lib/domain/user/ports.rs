use async_trait::async_trait;

use crate::domain::credentials::Name;
use crate::domain::errors::CredentialError;
use crate::domain::errors::RepositoryError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;

/// Port for user registration and login.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated name and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `PrincipalExists` - Name is already taken
    /// * `Internal` - Hashing or storage failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, CredentialError>;

    /// Check credentials and issue a token signed with the service-wide secret.
    ///
    /// # Returns
    /// Signed JWT
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown name or wrong password
    /// * `Internal` - Storage or signing failed
    async fn login(&self, command: LoginCommand) -> Result<String, CredentialError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `DuplicateName` - Name is already taken
    /// * `Database` - Database operation failed
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Retrieve a user by name.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_name(&self, name: &Name) -> Result<Option<User>, RepositoryError>;
}
