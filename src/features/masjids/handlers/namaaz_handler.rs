use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::masjids::dtos::{
    NamaazPayload, NamaazResponseDto, TimingPayload, TimingResponseDto,
};
use crate::features::masjids::services::NamaazService;
use crate::shared::types::ApiResponse;

// ==================== Namaaz Handlers ====================

/// List all namaaz
#[utoipa::path(
    get,
    path = "/api/namaaz",
    responses(
        (status = 200, description = "List of namaaz", body = ApiResponse<Vec<NamaazResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn list_namaaz(
    _user: AuthenticatedUser,
    State(service): State<Arc<NamaazService>>,
) -> Result<Json<ApiResponse<Vec<NamaazResponseDto>>>> {
    let items = service.list_namaaz().await?;
    Ok(Json(ApiResponse::list(items, "Namaaz fetched successfully")))
}

/// Get a namaaz by id
#[utoipa::path(
    get,
    path = "/api/namaaz/{id}",
    params(("id" = String, Path, description = "Namaaz id")),
    responses(
        (status = 200, description = "Namaaz details", body = ApiResponse<NamaazResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Namaaz not found")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn get_namaaz(
    _user: AuthenticatedUser,
    State(service): State<Arc<NamaazService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<NamaazResponseDto>>> {
    let item = service.get_namaaz(&id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Create a namaaz
#[utoipa::path(
    post,
    path = "/api/admin/namaaz",
    request_body = NamaazPayload,
    responses(
        (status = 201, description = "Namaaz created", body = ApiResponse<NamaazResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 409, description = "Namaaz name already present")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn create_namaaz(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NamaazService>>,
    AppJson(payload): AppJson<NamaazPayload>,
) -> Result<(StatusCode, Json<ApiResponse<NamaazResponseDto>>)> {
    let item = service.create_namaaz(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(item),
            Some("Namaaz added successfully".to_string()),
            None,
        )),
    ))
}

/// Update a namaaz
#[utoipa::path(
    put,
    path = "/api/admin/namaaz/{id}",
    params(("id" = String, Path, description = "Namaaz id")),
    request_body = NamaazPayload,
    responses(
        (status = 200, description = "Namaaz updated", body = ApiResponse<NamaazResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Namaaz not found")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn update_namaaz(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NamaazService>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<NamaazPayload>,
) -> Result<Json<ApiResponse<NamaazResponseDto>>> {
    let item = service.update_namaaz(&id, payload).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Namaaz updated successfully".to_string()),
        None,
    )))
}

/// Delete a namaaz
#[utoipa::path(
    delete,
    path = "/api/admin/namaaz/{id}",
    params(("id" = String, Path, description = "Namaaz id")),
    responses(
        (status = 200, description = "Namaaz deleted"),
        (status = 403, description = "Admin access required")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn delete_namaaz(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NamaazService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_namaaz(&id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Namaaz deleted successfully".to_string()),
        None,
    )))
}

// ==================== Timing Handlers ====================

/// List all masjid namaaz timings
#[utoipa::path(
    get,
    path = "/api/masjid-namaaz-timings",
    responses(
        (status = 200, description = "List of masjid namaaz timings", body = ApiResponse<Vec<TimingResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn list_timings(
    _user: AuthenticatedUser,
    State(service): State<Arc<NamaazService>>,
) -> Result<Json<ApiResponse<Vec<TimingResponseDto>>>> {
    let items = service.list_timings().await?;
    Ok(Json(ApiResponse::list(items, "Masjid namaaz timings fetched successfully")))
}

/// Get a masjid namaaz timing by id
#[utoipa::path(
    get,
    path = "/api/masjid-namaaz-timings/{id}",
    params(("id" = String, Path, description = "Masjid namaaz timing id")),
    responses(
        (status = 200, description = "Masjid namaaz timing details", body = ApiResponse<TimingResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Masjid namaaz timing not found")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn get_timing(
    _user: AuthenticatedUser,
    State(service): State<Arc<NamaazService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TimingResponseDto>>> {
    let item = service.get_timing(&id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Create a masjid namaaz timing
#[utoipa::path(
    post,
    path = "/api/admin/masjid-namaaz-timings",
    request_body = TimingPayload,
    responses(
        (status = 201, description = "Masjid namaaz timing created", body = ApiResponse<TimingResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Masjid or namaaz not found")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn create_timing(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NamaazService>>,
    AppJson(payload): AppJson<TimingPayload>,
) -> Result<(StatusCode, Json<ApiResponse<TimingResponseDto>>)> {
    let item = service.create_timing(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(item),
            Some("Masjid namaaz timing added successfully".to_string()),
            None,
        )),
    ))
}

/// Update a masjid namaaz timing
#[utoipa::path(
    put,
    path = "/api/admin/masjid-namaaz-timings/{id}",
    params(("id" = String, Path, description = "Masjid namaaz timing id")),
    request_body = TimingPayload,
    responses(
        (status = 200, description = "Masjid namaaz timing updated", body = ApiResponse<TimingResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Masjid namaaz timing not found")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn update_timing(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NamaazService>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<TimingPayload>,
) -> Result<Json<ApiResponse<TimingResponseDto>>> {
    let item = service.update_timing(&id, payload).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Masjid namaaz timing updated successfully".to_string()),
        None,
    )))
}

/// Delete a masjid namaaz timing
#[utoipa::path(
    delete,
    path = "/api/admin/masjid-namaaz-timings/{id}",
    params(("id" = String, Path, description = "Masjid namaaz timing id")),
    responses(
        (status = 200, description = "Masjid namaaz timing deleted"),
        (status = 403, description = "Admin access required")
    ),
    tag = "namaaz",
    security(("bearer_auth" = []))
)]
pub async fn delete_timing(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<NamaazService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_timing(&id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Masjid namaaz timing deleted successfully".to_string()),
        None,
    )))
}
