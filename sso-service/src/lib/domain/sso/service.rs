use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::PasswordHashing;
use auth::TokenIssuer;
use chrono::Duration;

use crate::domain::app::models::App;
use crate::domain::app::models::NewApp;
use crate::domain::app::models::Role;
use crate::domain::app::ports::AppRepository;
use crate::domain::client::models::Client;
use crate::domain::client::models::NewClient;
use crate::domain::client::ports::ClientRepository;
use crate::domain::credentials::CredentialHasher;
use crate::domain::credentials::TOKEN_VALIDITY_HOURS;
use crate::domain::errors::CredentialError;
use crate::domain::errors::RepositoryError;
use crate::domain::sso::models::GenerateTokenCommand;
use crate::domain::sso::models::RegisterAppCommand;
use crate::domain::sso::models::RegisterClientCommand;
use crate::domain::sso::ports::SsoServicePort;

/// Domain service for clients, apps and role-scoped tokens.
///
/// Tokens are always signed with the secret of the app they are issued
/// for; there is no shared fallback key.
pub struct SsoService<CR, AR>
where
    CR: ClientRepository,
    AR: AppRepository,
{
    clients: Arc<CR>,
    apps: Arc<AR>,
    hasher: CredentialHasher,
    token_issuer: TokenIssuer,
}

impl<CR, AR> SsoService<CR, AR>
where
    CR: ClientRepository,
    AR: AppRepository,
{
    /// Create a new SSO service with injected dependencies.
    ///
    /// # Arguments
    /// * `clients` - Client persistence implementation
    /// * `apps` - App persistence implementation
    /// * `hashing` - Password hashing strategy chosen at start-up
    pub fn new(clients: Arc<CR>, apps: Arc<AR>, hashing: Arc<dyn PasswordHashing>) -> Self {
        Self {
            clients,
            apps,
            hasher: CredentialHasher::new(hashing),
            token_issuer: TokenIssuer::new(),
        }
    }

    fn sign(&self, client: &Client, app: &App, role: &Role) -> Result<String, CredentialError> {
        const OP: &str = "sso.generate_token";

        let claims = Claims::new()
            .with_subject(client.name.as_str())
            .with_extra("client_id", client.id.0)
            .with_extra("client_name", client.name.as_str())
            .with_extra("app_name", app.name.as_str())
            .with_extra("role", role.as_str());

        self.token_issuer
            .issue(
                claims,
                app.secret.as_bytes(),
                Duration::hours(TOKEN_VALIDITY_HOURS),
            )
            .map_err(|e| {
                tracing::error!(
                    op = OP,
                    name = %client.name,
                    app = %app.name,
                    error = %e,
                    "Failed to sign token"
                );
                CredentialError::internal(OP, e)
            })
    }
}

#[async_trait]
impl<CR, AR> SsoServicePort for SsoService<CR, AR>
where
    CR: ClientRepository,
    AR: AppRepository,
{
    async fn register_client(
        &self,
        command: RegisterClientCommand,
    ) -> Result<Client, CredentialError> {
        const OP: &str = "sso.register_client";
        tracing::info!(op = OP, name = %command.name, "Registering client");

        let password_hash = self.hasher.hash(&command.password).await.map_err(|e| {
            tracing::error!(op = OP, name = %command.name, error = %e, "Failed to hash password");
            CredentialError::internal(OP, e)
        })?;

        let client = NewClient {
            name: command.name,
            password_hash,
        };

        self.clients.create(client).await.map_err(|e| match e {
            RepositoryError::DuplicateName(name) => {
                tracing::warn!(op = OP, name = %name, "Client already exists");
                CredentialError::ClientExists(name)
            }
            e => {
                tracing::error!(op = OP, error = %e, "Failed to save client");
                CredentialError::internal(OP, e)
            }
        })
    }

    async fn register_app(&self, command: RegisterAppCommand) -> Result<App, CredentialError> {
        const OP: &str = "sso.register_app";
        tracing::info!(op = OP, name = %command.name, "Registering app");

        let app = NewApp {
            name: command.name,
            secret: command.secret,
            roles: command.roles,
        };

        self.apps.create(app).await.map_err(|e| match e {
            RepositoryError::DuplicateName(name) => {
                tracing::warn!(op = OP, name = %name, "App already exists");
                CredentialError::AppExists(name)
            }
            e => {
                tracing::error!(op = OP, error = %e, "Failed to save app");
                CredentialError::internal(OP, e)
            }
        })
    }

    async fn generate_token(
        &self,
        command: GenerateTokenCommand,
    ) -> Result<String, CredentialError> {
        const OP: &str = "sso.generate_token";
        tracing::info!(
            op = OP,
            name = %command.client_name,
            app = %command.app_name,
            "Generating token"
        );

        let client = self
            .clients
            .find_by_name(&command.client_name)
            .await
            .map_err(|e| {
                tracing::error!(
                    op = OP,
                    name = %command.client_name,
                    error = %e,
                    "Failed to get client"
                );
                CredentialError::internal(OP, e)
            })?
            .ok_or_else(|| {
                tracing::warn!(op = OP, name = %command.client_name, "Client not found");
                CredentialError::InvalidCredentials
            })?;

        match self
            .hasher
            .verify(&command.password, &client.password_hash)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::info!(op = OP, name = %client.name, "Invalid credentials");
                return Err(CredentialError::InvalidCredentials);
            }
            Err(e) => {
                tracing::warn!(op = OP, name = %client.name, error = %e, "Failed to verify password");
                return Err(CredentialError::InvalidCredentials);
            }
        }

        let app = self
            .apps
            .find_by_name(&command.app_name)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, app = %command.app_name, error = %e, "Failed to get app");
                CredentialError::internal(OP, e)
            })?
            .ok_or_else(|| {
                tracing::warn!(op = OP, app = %command.app_name, "App not found");
                CredentialError::InvalidApp(command.app_name.to_string())
            })?;

        if !app.roles.contains(&command.role) {
            tracing::warn!(
                op = OP,
                name = %client.name,
                app = %app.name,
                role = %command.role,
                "Client requested a role the app does not declare"
            );
            return Err(CredentialError::InvalidRole {
                app: app.name.to_string(),
                role: command.role.to_string(),
            });
        }

        self.sign(&client, &app, &command.role)
    }
}
