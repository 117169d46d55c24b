use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::masjids::dtos::{
    check_masjid_id, ChartFile, MasjidPayload, MasjidResponseDto, UploadTimingChartDto,
};
use crate::features::masjids::services::MasjidService;
use crate::shared::types::ApiResponse;

/// List all masjids
#[utoipa::path(
    get,
    path = "/api/masjids",
    responses(
        (status = 200, description = "List of masjids", body = ApiResponse<Vec<MasjidResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "masjids",
    security(("bearer_auth" = []))
)]
pub async fn list_masjids(
    _user: AuthenticatedUser,
    State(service): State<Arc<MasjidService>>,
) -> Result<Json<ApiResponse<Vec<MasjidResponseDto>>>> {
    let masjids = service.list_masjids().await?;
    Ok(Json(ApiResponse::list(masjids, "Masjids fetched successfully")))
}

/// Get a masjid by id
#[utoipa::path(
    get,
    path = "/api/masjids/{id}",
    params(("id" = String, Path, description = "Masjid id")),
    responses(
        (status = 200, description = "Masjid details", body = ApiResponse<MasjidResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Masjid not found")
    ),
    tag = "masjids",
    security(("bearer_auth" = []))
)]
pub async fn get_masjid(
    _user: AuthenticatedUser,
    State(service): State<Arc<MasjidService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MasjidResponseDto>>> {
    let masjid = service.get_masjid(&id).await?;
    Ok(Json(ApiResponse::success(Some(masjid), None, None)))
}

/// Create a masjid in an existing city
#[utoipa::path(
    post,
    path = "/api/admin/masjids",
    request_body = MasjidPayload,
    responses(
        (status = 201, description = "Masjid created", body = ApiResponse<MasjidResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "City not found")
    ),
    tag = "masjids",
    security(("bearer_auth" = []))
)]
pub async fn create_masjid(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MasjidService>>,
    AppJson(payload): AppJson<MasjidPayload>,
) -> Result<(StatusCode, Json<ApiResponse<MasjidResponseDto>>)> {
    let masjid = service.create_masjid(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(masjid),
            Some("Masjid added successfully".to_string()),
            None,
        )),
    ))
}

/// Update a masjid
#[utoipa::path(
    put,
    path = "/api/admin/masjids/{id}",
    params(("id" = String, Path, description = "Masjid id")),
    request_body = MasjidPayload,
    responses(
        (status = 200, description = "Masjid updated", body = ApiResponse<MasjidResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Masjid or city not found")
    ),
    tag = "masjids",
    security(("bearer_auth" = []))
)]
pub async fn update_masjid(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MasjidService>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MasjidPayload>,
) -> Result<Json<ApiResponse<MasjidResponseDto>>> {
    let masjid = service.update_masjid(&id, payload).await?;
    Ok(Json(ApiResponse::success(
        Some(masjid),
        Some("Masjid updated successfully".to_string()),
        None,
    )))
}

/// Delete a masjid
#[utoipa::path(
    delete,
    path = "/api/admin/masjids/{id}",
    params(("id" = String, Path, description = "Masjid id")),
    responses(
        (status = 200, description = "Masjid deleted"),
        (status = 403, description = "Admin access required")
    ),
    tag = "masjids",
    security(("bearer_auth" = []))
)]
pub async fn delete_masjid(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MasjidService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_masjid(&id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Masjid deleted successfully".to_string()),
        None,
    )))
}

/// Upload a masjid's prayer timing chart
///
/// Accepts multipart/form-data with a `file` part holding a png, jpeg or jpg
/// image of at most 2 MiB.
#[utoipa::path(
    post,
    path = "/api/admin/masjids/{id}/timing-chart",
    params(("id" = String, Path, description = "Masjid id")),
    request_body(
        content = UploadTimingChartDto,
        content_type = "multipart/form-data",
        description = "Timing chart image",
    ),
    responses(
        (status = 200, description = "Timing chart stored", body = ApiResponse<MasjidResponseDto>),
        (status = 400, description = "Invalid masjid id, file type or size"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Masjid not found")
    ),
    tag = "masjids",
    security(("bearer_auth" = []))
)]
pub async fn upload_timing_chart(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<MasjidService>>,
    Path(masjid_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<MasjidResponseDto>>> {
    check_masjid_id(&masjid_id)?;

    let mut file: Option<ChartFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            debug!("Ignoring unknown field: {:?}", field.name());
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_default();
        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read file bytes: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        file = Some(ChartFile {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    let file = file.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let masjid = service.upload_timing_chart(&masjid_id, file).await?;

    Ok(Json(ApiResponse::success(
        Some(masjid),
        Some("Timing chart uploaded successfully".to_string()),
        None,
    )))
}
