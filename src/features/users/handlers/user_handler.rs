use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::users::dtos::{AssignMasjidPayload, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Attach a masjid to a user
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/masjids",
    params(("id" = String, Path, description = "User id")),
    request_body = AssignMasjidPayload,
    responses(
        (status = 200, description = "Masjid attached", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User or masjid not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn assign_masjid(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AssignMasjidPayload>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    tracing::debug!("Admin {} assigning masjid to user {}", admin.user_id, id);
    let user = service.assign_masjid(&id, payload).await?;
    Ok(Json(ApiResponse::success(
        Some(user),
        Some("Masjid assigned successfully".to_string()),
        None,
    )))
}
