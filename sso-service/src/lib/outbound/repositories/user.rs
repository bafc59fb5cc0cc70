use async_trait::async_trait;
use sqlx::PgPool;

use super::insert_error;
use crate::domain::credentials::Name;
use crate::domain::credentials::PasswordHash;
use crate::domain::errors::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (name, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.password_hash.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, &user.name))?;

        Ok(user)
    }

    async fn find_by_name(&self, name: &Name) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT name, password_hash
            FROM users
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some((name, password_hash)) => Ok(Some(User {
                name: Name::new(name)?,
                password_hash: PasswordHash::new(password_hash),
            })),
            None => Ok(None),
        }
    }
}
