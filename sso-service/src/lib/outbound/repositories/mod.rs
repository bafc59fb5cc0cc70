pub mod app;
pub mod client;
pub mod memory;
pub mod user;

pub use app::PostgresAppRepository;
pub use client::PostgresClientRepository;
pub use memory::InMemoryRepository;
pub use user::PostgresUserRepository;

use crate::domain::credentials::Name;
use crate::domain::errors::RepositoryError;

/// Translate an INSERT failure, turning the `name` unique constraint into
/// `DuplicateName`.
fn insert_error(e: sqlx::Error, name: &Name) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::DuplicateName(name.to_string());
        }
    }
    RepositoryError::Database(e.to_string())
}
