use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::app::models::App;
use crate::domain::app::models::AppId;
use crate::domain::app::models::NewApp;
use crate::domain::app::ports::AppRepository;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::NewClient;
use crate::domain::client::ports::ClientRepository;
use crate::domain::credentials::Name;
use crate::domain::errors::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Process-local storage for users, clients and apps.
///
/// Used when no database is configured and by the test-suites. Every
/// insert takes the write lock, so concurrent registrations of one name
/// are serialized and exactly one of them wins.
#[derive(Default)]
pub struct InMemoryRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    users: HashMap<String, User>,
    clients: HashMap<String, Client>,
    apps: HashMap<String, App>,
    last_client_id: i64,
    last_app_id: i64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut state = self.state.write().await;
        if state.users.contains_key(user.name.as_str()) {
            return Err(RepositoryError::DuplicateName(user.name.to_string()));
        }

        state.users.insert(user.name.to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_name(&self, name: &Name) -> Result<Option<User>, RepositoryError> {
        Ok(self.state.read().await.users.get(name.as_str()).cloned())
    }
}

#[async_trait]
impl ClientRepository for InMemoryRepository {
    async fn create(&self, client: NewClient) -> Result<Client, RepositoryError> {
        let mut state = self.state.write().await;
        if state.clients.contains_key(client.name.as_str()) {
            return Err(RepositoryError::DuplicateName(client.name.to_string()));
        }

        state.last_client_id += 1;
        let client = client.with_id(ClientId(state.last_client_id));
        state.clients.insert(client.name.to_string(), client.clone());
        Ok(client)
    }

    async fn find_by_name(&self, name: &Name) -> Result<Option<Client>, RepositoryError> {
        Ok(self.state.read().await.clients.get(name.as_str()).cloned())
    }
}

#[async_trait]
impl AppRepository for InMemoryRepository {
    async fn create(&self, app: NewApp) -> Result<App, RepositoryError> {
        let mut state = self.state.write().await;
        if state.apps.contains_key(app.name.as_str()) {
            return Err(RepositoryError::DuplicateName(app.name.to_string()));
        }

        state.last_app_id += 1;
        let app = app.with_id(AppId(state.last_app_id));
        state.apps.insert(app.name.to_string(), app.clone());
        Ok(app)
    }

    async fn find_by_name(&self, name: &Name) -> Result<Option<App>, RepositoryError> {
        Ok(self.state.read().await.apps.get(name.as_str()).cloned())
    }
}
