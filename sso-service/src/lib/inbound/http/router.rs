use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::generate_token::generate_token;
use super::handlers::login::login;
use super::handlers::register_app::register_app;
use super::handlers::register_client::register_client;
use super::handlers::register_user::register_user;
use crate::domain::sso::ports::SsoServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub sso_service: Arc<dyn SsoServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    sso_service: Arc<dyn SsoServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        sso_service,
    };

    let user_routes = Router::new()
        .route("/api/users", post(register_user))
        .route("/api/auth/login", post(login));

    let sso_routes = Router::new()
        .route("/api/clients", post(register_client))
        .route("/api/apps", post(register_app))
        .route("/api/tokens", post(generate_token));

    // Request headers are left out of the span: login bodies are JSON, but
    // proxies in front of the service may forward credentials in headers.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(user_routes)
        .merge(sso_routes)
        .layer(trace_layer)
        .with_state(state)
}
