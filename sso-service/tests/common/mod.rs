use std::sync::Arc;

use auth::Argon2Hasher;
use auth::JwtHandler;
use auth::PasswordHashing;
use serde_json::json;
use sso_service::domain::sso::service::SsoService;
use sso_service::domain::user::service::UserService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::repositories::InMemoryRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheapest Argon2 parameters keep debug-build tests fast
        let hashing: Arc<dyn PasswordHashing> =
            Arc::new(Argon2Hasher::with_params(8, 1, 1).expect("Invalid Argon2 parameters"));
        let repository = Arc::new(InMemoryRepository::new());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&repository),
            Arc::clone(&hashing),
            JWT_SECRET,
        ));
        let sso_service = Arc::new(SsoService::new(
            Arc::clone(&repository),
            repository,
            hashing,
        ));

        let router = create_router(user_service, sso_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub async fn register_client(&self, name: &str, password: &str) -> reqwest::Response {
        self.post("/api/clients")
            .json(&json!({ "name": name, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn register_app(&self, name: &str, secret: &str, roles: &[&str]) -> reqwest::Response {
        self.post("/api/apps")
            .json(&json!({ "name": name, "secret": secret, "roles": roles }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn generate_token(
        &self,
        client_name: &str,
        password: &str,
        app_name: &str,
        role: &str,
    ) -> reqwest::Response {
        self.post("/api/tokens")
            .json(&json!({
                "client_name": client_name,
                "password": password,
                "app_name": app_name,
                "role": role
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
