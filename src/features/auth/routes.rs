use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

/// Protected auth routes (require JWT authentication)
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .route("/api/auth/password", patch(handlers::update_password))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::middleware::auth_middleware;
    use crate::features::users::models::User;
    use crate::shared::memory::MemoryRepository;
    use crate::shared::test_helpers::test_token_service;
    use axum::http::StatusCode;
    use axum::middleware::from_fn_with_state;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let tokens = test_token_service();
        let service = Arc::new(AuthService::new(
            Arc::new(MemoryRepository::<User>::new()),
            tokens.clone(),
        ));
        let app = public_routes(service.clone()).merge(
            protected_routes(service).route_layer(from_fn_with_state(tokens, auth_middleware)),
        );
        TestServer::new(app).unwrap()
    }

    async fn signup_and_login(server: &TestServer) -> String {
        server
            .post("/api/auth/signup")
            .json(&json!({
                "name": "Ahmed",
                "email": "ahmed@example.com",
                "password": "Abc123!",
                "confirmPassword": "Abc123!",
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "ahmed@example.com", "password": "Abc123!"}))
            .await;
        response.assert_status_ok();
        response.json::<Value>()["data"]["accessToken"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_me_with_token() {
        let server = server();
        let token = signup_and_login(&server).await;

        let response = server
            .get("/api/auth/me")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["email"], "ahmed@example.com");
        assert_eq!(body["data"]["role"], "user");
    }

    #[tokio::test]
    async fn test_me_without_token() {
        server()
            .get("/api/auth/me")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_signup_weak_password() {
        let response = server()
            .post("/api/auth/signup")
            .json(&json!({
                "name": "Ahmed",
                "email": "ahmed@example.com",
                "password": "abc123",
                "confirmPassword": "abc123",
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "Please enter a strong password"
        );
    }

    #[tokio::test]
    async fn test_change_password() {
        let server = server();
        let token = signup_and_login(&server).await;

        server
            .patch("/api/auth/password")
            .authorization_bearer(&token)
            .json(&json!({
                "email": "ahmed@example.com",
                "oldPassword": "Abc123!",
                "newPassword": "Xyz789?",
            }))
            .await
            .assert_status_ok();

        server
            .post("/api/auth/login")
            .json(&json!({"email": "ahmed@example.com", "password": "Xyz789?"}))
            .await
            .assert_status_ok();
    }
}
