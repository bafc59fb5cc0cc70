use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ParseRequestError;
use super::TokenResponseData;
use crate::domain::app::models::Role;
use crate::domain::credentials::Name;
use crate::domain::credentials::Password;
use crate::domain::sso::models::GenerateTokenCommand;
use crate::inbound::http::router::AppState;

pub async fn generate_token(
    State(state): State<AppState>,
    Json(body): Json<GenerateTokenRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .sso_service
        .generate_token(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, TokenResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateTokenRequest {
    client_name: String,
    password: String,
    app_name: String,
    role: String,
}

impl GenerateTokenRequest {
    fn try_into_command(self) -> Result<GenerateTokenCommand, ParseRequestError> {
        let client_name = Name::new(self.client_name)?;
        let password = Password::new(self.password)?;
        let app_name = Name::new(self.app_name)?;
        let role = Role::new(self.role)?;
        Ok(GenerateTokenCommand::new(client_name, password, app_name, role))
    }
}
