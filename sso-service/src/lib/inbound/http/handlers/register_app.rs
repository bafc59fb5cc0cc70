use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::ParseRequestError;
use crate::domain::app::models::App;
use crate::domain::app::models::AppSecret;
use crate::domain::app::models::Roles;
use crate::domain::credentials::Name;
use crate::domain::sso::models::RegisterAppCommand;
use crate::inbound::http::router::AppState;

pub async fn register_app(
    State(state): State<AppState>,
    Json(body): Json<RegisterAppRequest>,
) -> Result<ApiSuccess<RegisterAppResponseData>, ApiError> {
    state
        .sso_service
        .register_app(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref app| ApiSuccess::new(StatusCode::CREATED, app.into()))
}

/// HTTP request body for registering an app (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterAppRequest {
    name: String,
    secret: String,
    roles: Vec<String>,
}

impl RegisterAppRequest {
    fn try_into_command(self) -> Result<RegisterAppCommand, ParseRequestError> {
        let name = Name::new(self.name)?;
        let secret = AppSecret::new(self.secret)?;
        let roles = Roles::new(self.roles)?;
        Ok(RegisterAppCommand::new(name, secret, roles))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterAppResponseData {
    pub id: i64,
    pub name: String,
}

impl From<&App> for RegisterAppResponseData {
    fn from(app: &App) -> Self {
        Self {
            id: app.id.0,
            name: app.name.to_string(),
        }
    }
}
