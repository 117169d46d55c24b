use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for user administration
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/admin/users/{id}/masjids",
            post(handlers::assign_masjid),
        )
        .with_state(service)
}
