use std::sync::Arc;

use axum::{extract::Request, middleware::Next, response::Response, Router};
use uuid::Uuid;

use crate::features::auth::model::{AuthenticatedUser, UserRole};
use crate::features::auth::TokenService;

pub fn create_user(role: UserRole) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: Uuid::now_v7(),
        email: format!("{}@example.com", role.as_str().to_lowercase()),
        role,
    }
}

async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_user(UserRole::Admin));
    next.run(request).await
}

async fn inject_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_user(UserRole::User));
    next.run(request).await
}

/// Every request through `router` is authenticated as an admin
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}

/// Every request through `router` is authenticated as a plain user
pub fn with_user_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_user_middleware))
}

pub fn test_token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(
        "test-signing-secret-that-is-long-enough".to_string(),
        "masjid-directory-test".to_string(),
        std::time::Duration::from_secs(3600),
        std::time::Duration::from_secs(0),
    ))
}
