use async_trait::async_trait;

use crate::domain::app::models::App;
use crate::domain::app::models::NewApp;
use crate::domain::credentials::Name;
use crate::domain::errors::RepositoryError;

/// Persistence operations for apps.
#[async_trait]
pub trait AppRepository: Send + Sync + 'static {
    /// Persist a new app and assign its identifier.
    ///
    /// # Errors
    /// * `DuplicateName` - Name is already taken
    /// * `Database` - Database operation failed
    async fn create(&self, app: NewApp) -> Result<App, RepositoryError>;

    /// Retrieve an app by name.
    ///
    /// # Returns
    /// Optional app entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_name(&self, name: &Name) -> Result<Option<App>, RepositoryError>;
}
