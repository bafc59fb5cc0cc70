use async_trait::async_trait;

use crate::domain::app::models::App;
use crate::domain::client::models::Client;
use crate::domain::errors::CredentialError;
use crate::domain::sso::models::GenerateTokenCommand;
use crate::domain::sso::models::RegisterAppCommand;
use crate::domain::sso::models::RegisterClientCommand;

/// Port for client/app registration and role-scoped token issuance.
#[async_trait]
pub trait SsoServicePort: Send + Sync + 'static {
    /// Register a new client.
    ///
    /// # Returns
    /// Created client, including the identifier assigned by storage
    ///
    /// # Errors
    /// * `ClientExists` - Name is already taken
    /// * `Internal` - Hashing or storage failed
    async fn register_client(
        &self,
        command: RegisterClientCommand,
    ) -> Result<Client, CredentialError>;

    /// Register a new app with its signing secret and role set.
    ///
    /// # Returns
    /// Created app, including the identifier assigned by storage
    ///
    /// # Errors
    /// * `AppExists` - Name is already taken
    /// * `Internal` - Storage failed
    async fn register_app(&self, command: RegisterAppCommand) -> Result<App, CredentialError>;

    /// Check client credentials and issue a token for one app and role.
    ///
    /// Checks run in a fixed order: credentials, then app existence, then
    /// role membership.
    ///
    /// # Returns
    /// JWT signed with the app's own secret
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown client or wrong password
    /// * `InvalidApp` - App does not exist
    /// * `InvalidRole` - Role is not declared by the app
    /// * `Internal` - Storage or signing failed
    async fn generate_token(&self, command: GenerateTokenCommand)
        -> Result<String, CredentialError>;
}
