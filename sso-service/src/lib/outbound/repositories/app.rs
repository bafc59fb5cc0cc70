use async_trait::async_trait;
use sqlx::PgPool;

use super::insert_error;
use crate::domain::app::models::App;
use crate::domain::app::models::AppId;
use crate::domain::app::models::AppSecret;
use crate::domain::app::models::NewApp;
use crate::domain::app::models::Roles;
use crate::domain::app::ports::AppRepository;
use crate::domain::credentials::Name;
use crate::domain::errors::RepositoryError;

pub struct PostgresAppRepository {
    pool: PgPool,
}

impl PostgresAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppRepository for PostgresAppRepository {
    async fn create(&self, app: NewApp) -> Result<App, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO apps (name, secret, roles)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(app.name.as_str())
        .bind(app.secret.as_str())
        .bind(app.roles.to_strings())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, &app.name))?;

        Ok(app.with_id(AppId(id)))
    }

    async fn find_by_name(&self, name: &Name) -> Result<Option<App>, RepositoryError> {
        let row = sqlx::query_as::<_, (i64, String, String, Vec<String>)>(
            r#"
            SELECT id, name, secret, roles
            FROM apps
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some((id, name, secret, roles)) => Ok(Some(App {
                id: AppId(id),
                name: Name::new(name)?,
                secret: AppSecret::new(secret)?,
                roles: Roles::new(roles)?,
            })),
            None => Ok(None),
        }
    }
}
