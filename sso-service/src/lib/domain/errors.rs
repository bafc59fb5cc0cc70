use thiserror::Error;

/// Error for Name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
}

/// Error for plaintext password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
}

/// Error for AppSecret validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("App secret must not be empty")]
    Empty,
}

/// Error for Role and Roles validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role must not be empty")]
    EmptyRole,

    #[error("App must declare at least one role")]
    NoRoles,
}

/// Failures reported by the storage adapters.
///
/// A missing record is not an error: finders return `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Name already taken: {0}")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<NameError> for RepositoryError {
    fn from(err: NameError) -> Self {
        RepositoryError::Database(format!("Invalid stored name: {}", err))
    }
}

impl From<SecretError> for RepositoryError {
    fn from(err: SecretError) -> Self {
        RepositoryError::Database(format!("Invalid stored secret: {}", err))
    }
}

impl From<RoleError> for RepositoryError {
    fn from(err: RoleError) -> Self {
        RepositoryError::Database(format!("Invalid stored roles: {}", err))
    }
}

/// Top-level error for registration and token issuance.
///
/// Every variant except `Internal` is a client-correctable condition and is
/// passed up unchanged. `Internal` carries the failing operation and the
/// underlying cause for the logs; its details are never returned to callers.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Unknown principal or wrong password. The two cases are deliberately
    /// indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    PrincipalExists(String),

    #[error("Client already exists: {0}")]
    ClientExists(String),

    #[error("App already exists: {0}")]
    AppExists(String),

    #[error("Invalid app: {0}")]
    InvalidApp(String),

    #[error("Invalid role {role} for app {app}")]
    InvalidRole { app: String, role: String },

    #[error("{op}: {source}")]
    Internal {
        op: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl CredentialError {
    /// Wrap an unexpected failure with the name of the operation it broke.
    pub fn internal(op: &'static str, source: impl Into<anyhow::Error>) -> Self {
        CredentialError::Internal {
            op,
            source: source.into(),
        }
    }
}
