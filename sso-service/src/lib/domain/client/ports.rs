use async_trait::async_trait;

use crate::domain::client::models::Client;
use crate::domain::client::models::NewClient;
use crate::domain::credentials::Name;
use crate::domain::errors::RepositoryError;

/// Persistence operations for clients.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Persist a new client and assign its identifier.
    ///
    /// # Errors
    /// * `DuplicateName` - Name is already taken
    /// * `Database` - Database operation failed
    async fn create(&self, client: NewClient) -> Result<Client, RepositoryError>;

    /// Retrieve a client by name.
    ///
    /// # Returns
    /// Optional client entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_name(&self, name: &Name) -> Result<Option<Client>, RepositoryError>;
}
