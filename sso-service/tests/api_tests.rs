mod common;

use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn message(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["message"]
        .as_str()
        .expect("Missing error message")
        .to_string()
}

#[tokio::test]
async fn test_register_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({ "name": "nicola", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["name"], "nicola");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_user_duplicate_name() {
    let app = TestApp::spawn().await;

    app.post("/api/users")
        .json(&json!({ "name": "nicola", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/users")
        .json(&json!({ "name": "nicola", "password": "another" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(message(response).await.contains("already exists"));
}

#[tokio::test]
async fn test_register_user_empty_fields() {
    let app = TestApp::spawn().await;

    for body in [
        json!({ "name": "", "password": "pass_word!" }),
        json!({ "name": "nicola", "password": "" }),
    ] {
        let response = app
            .post("/api/users")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/api/users")
        .json(&json!({ "name": "nicola", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "name": "nicola", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("Missing token");

    let claims: Claims = app.jwt_handler.decode(token).expect("Failed to decode token");
    assert_eq!(claims.sub.as_deref(), Some("nicola"));
    let (iat, exp) = (claims.iat.unwrap(), claims.exp.unwrap());
    assert_eq!(exp - iat, 5 * 60 * 60);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_alike() {
    let app = TestApp::spawn().await;

    app.post("/api/users")
        .json(&json!({ "name": "nicola", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({ "name": "nicola", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = message(wrong_password).await;

    let unknown_user = app
        .post("/api/auth/login")
        .json(&json!({ "name": "ghost", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_password, message(unknown_user).await);
}

#[tokio::test]
async fn test_register_client_assigns_distinct_ids() {
    let app = TestApp::spawn().await;

    let first = app.register_client("alice", "pw").await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first: serde_json::Value = first.json().await.expect("Failed to parse response");

    let second = app.register_client("bob", "pw").await;
    assert_eq!(second.status(), StatusCode::CREATED);
    let second: serde_json::Value = second.json().await.expect("Failed to parse response");

    assert_eq!(first["data"]["name"], "alice");
    assert!(first["data"]["id"].is_i64());
    assert_ne!(first["data"]["id"], second["data"]["id"]);
}

#[tokio::test]
async fn test_register_client_duplicate_name() {
    let app = TestApp::spawn().await;

    app.register_client("alice", "pw").await;
    let response = app.register_client("alice", "other").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_app_validation() {
    let app = TestApp::spawn().await;

    assert_eq!(
        app.register_app("billing", "s3cr3t", &[]).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        app.register_app("billing", "", &["admin"]).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        app.register_app("billing", "s3cr3t", &["admin", ""]).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let created = app.register_app("billing", "s3cr3t", &["admin", "viewer"]).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let duplicate = app.register_app("billing", "other", &["admin"]).await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_generate_token_signed_with_app_secret() {
    let app = TestApp::spawn().await;

    let client = app.register_client("alice", "pw").await;
    let client: serde_json::Value = client.json().await.expect("Failed to parse response");
    app.register_app("billing", "s3cr3t", &["admin", "viewer"]).await;

    let response = app.generate_token("alice", "pw", "billing", "admin").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("Missing token");

    let claims: Claims = JwtHandler::new(b"s3cr3t")
        .decode(token)
        .expect("Failed to decode token");
    assert_eq!(claims.extra_str("client_name"), Some("alice"));
    assert_eq!(claims.extra_str("app_name"), Some("billing"));
    assert_eq!(claims.extra_str("role"), Some("admin"));
    assert_eq!(claims.extra_i64("client_id"), client["data"]["id"].as_i64());
    assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 5 * 60 * 60);

    // Neither the service-wide secret nor another string verifies it
    assert!(matches!(
        app.jwt_handler.decode::<Claims>(token),
        Err(JwtError::InvalidSignature)
    ));
    assert!(matches!(
        JwtHandler::new(b"other").decode::<Claims>(token),
        Err(JwtError::InvalidSignature)
    ));
}

#[tokio::test]
async fn test_generate_token_rejections() {
    let app = TestApp::spawn().await;

    app.register_client("alice", "pw").await;
    app.register_app("billing", "s3cr3t", &["admin", "viewer"]).await;

    let wrong_password = app.generate_token("alice", "nope", "billing", "admin").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_client = app.generate_token("mallory", "pw", "billing", "admin").await;
    assert_eq!(unknown_client.status(), StatusCode::UNAUTHORIZED);

    let unknown_app = app.generate_token("alice", "pw", "payroll", "admin").await;
    assert_eq!(unknown_app.status(), StatusCode::BAD_REQUEST);
    assert!(message(unknown_app).await.contains("payroll"));

    let undeclared_role = app.generate_token("alice", "pw", "billing", "owner").await;
    assert_eq!(undeclared_role.status(), StatusCode::BAD_REQUEST);
    assert!(message(undeclared_role).await.contains("owner"));

    // Credentials are checked before the app, so a bad password never leaks app existence
    let bad_password_unknown_app = app.generate_token("alice", "nope", "payroll", "admin").await;
    assert_eq!(bad_password_unknown_app.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_generate_token_empty_fields() {
    let app = TestApp::spawn().await;

    let response = app.generate_token("alice", "pw", "billing", "").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
