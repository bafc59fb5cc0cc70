use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::PasswordHashing;
use auth::TokenIssuer;
use chrono::Duration;

use crate::domain::credentials::CredentialHasher;
use crate::domain::credentials::TOKEN_VALIDITY_HOURS;
use crate::domain::errors::CredentialError;
use crate::domain::errors::RepositoryError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service for the single-secret user flow.
///
/// Every login token is signed with the same service-wide secret. Apps that
/// need their own secret and roles go through `SsoService`.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    hasher: CredentialHasher,
    token_issuer: TokenIssuer,
    jwt_secret: Vec<u8>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `hashing` - Password hashing strategy chosen at start-up
    /// * `jwt_secret` - Secret all login tokens are signed with
    pub fn new(repository: Arc<UR>, hashing: Arc<dyn PasswordHashing>, jwt_secret: &[u8]) -> Self {
        Self {
            repository,
            hasher: CredentialHasher::new(hashing),
            token_issuer: TokenIssuer::new(),
            jwt_secret: jwt_secret.to_vec(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, CredentialError> {
        const OP: &str = "user.register_user";
        tracing::info!(op = OP, name = %command.name, "Registering user");

        let password_hash = self.hasher.hash(&command.password).await.map_err(|e| {
            tracing::error!(op = OP, name = %command.name, error = %e, "Failed to hash password");
            CredentialError::internal(OP, e)
        })?;

        let user = User {
            name: command.name,
            password_hash,
        };

        self.repository.create(user).await.map_err(|e| match e {
            RepositoryError::DuplicateName(name) => {
                tracing::warn!(op = OP, name = %name, "User already exists");
                CredentialError::PrincipalExists(name)
            }
            e => {
                tracing::error!(op = OP, error = %e, "Failed to save user");
                CredentialError::internal(OP, e)
            }
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<String, CredentialError> {
        const OP: &str = "user.login";
        tracing::info!(op = OP, name = %command.name, "Logging in");

        let user = self
            .repository
            .find_by_name(&command.name)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, name = %command.name, error = %e, "Failed to get user");
                CredentialError::internal(OP, e)
            })?
            .ok_or_else(|| {
                tracing::warn!(op = OP, name = %command.name, "User not found");
                CredentialError::InvalidCredentials
            })?;

        match self.hasher.verify(&command.password, &user.password_hash).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::info!(op = OP, name = %user.name, "Invalid credentials");
                return Err(CredentialError::InvalidCredentials);
            }
            Err(e) => {
                tracing::warn!(op = OP, name = %user.name, error = %e, "Failed to verify password");
                return Err(CredentialError::InvalidCredentials);
            }
        }

        let claims = Claims::new().with_subject(user.name.as_str());

        self.token_issuer
            .issue(claims, &self.jwt_secret, Duration::hours(TOKEN_VALIDITY_HOURS))
            .map_err(|e| {
                tracing::error!(op = OP, name = %user.name, error = %e, "Failed to sign token");
                CredentialError::internal(OP, e)
            })
    }
}
