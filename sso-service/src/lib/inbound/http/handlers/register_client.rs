use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::ParseRequestError;
use crate::domain::client::models::Client;
use crate::domain::credentials::Name;
use crate::domain::credentials::Password;
use crate::domain::sso::models::RegisterClientCommand;
use crate::inbound::http::router::AppState;

pub async fn register_client(
    State(state): State<AppState>,
    Json(body): Json<RegisterClientRequest>,
) -> Result<ApiSuccess<RegisterClientResponseData>, ApiError> {
    state
        .sso_service
        .register_client(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::CREATED, client.into()))
}

/// HTTP request body for registering a client (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterClientRequest {
    name: String,
    password: String,
}

impl RegisterClientRequest {
    fn try_into_command(self) -> Result<RegisterClientCommand, ParseRequestError> {
        let name = Name::new(self.name)?;
        let password = Password::new(self.password)?;
        Ok(RegisterClientCommand::new(name, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterClientResponseData {
    pub id: i64,
    pub name: String,
}

impl From<&Client> for RegisterClientResponseData {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.0,
            name: client.name.to_string(),
        }
    }
}
