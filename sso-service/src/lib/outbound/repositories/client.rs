use async_trait::async_trait;
use sqlx::PgPool;

use super::insert_error;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::NewClient;
use crate::domain::client::ports::ClientRepository;
use crate::domain::credentials::Name;
use crate::domain::credentials::PasswordHash;
use crate::domain::errors::RepositoryError;

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn create(&self, client: NewClient) -> Result<Client, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clients (name, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(client.name.as_str())
        .bind(client.password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, &client.name))?;

        Ok(client.with_id(ClientId(id)))
    }

    async fn find_by_name(&self, name: &Name) -> Result<Option<Client>, RepositoryError> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            r#"
            SELECT id, name, password_hash
            FROM clients
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some((id, name, password_hash)) => Ok(Some(Client {
                id: ClientId(id),
                name: Name::new(name)?,
                password_hash: PasswordHash::new(password_hash),
            })),
            None => Ok(None),
        }
    }
}
