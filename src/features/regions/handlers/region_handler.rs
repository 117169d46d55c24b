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
use crate::features::regions::dtos::{
    CityPayload, CityResponseDto, CountryPayload, CountryResponseDto, StatePayload,
    StateResponseDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::ApiResponse;

fn done(message: &str) -> Json<ApiResponse<()>> {
    Json(ApiResponse::success(None, Some(message.to_string()), None))
}

// ==================== Country Handlers ====================

/// List all countries
#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "List of countries", body = ApiResponse<Vec<CountryResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn list_countries(
    _user: AuthenticatedUser,
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<CountryResponseDto>>>> {
    let countries = service.list_countries().await?;
    Ok(Json(ApiResponse::list(countries, "Countries fetched successfully")))
}

/// Get a country by id
#[utoipa::path(
    get,
    path = "/api/countries/{id}",
    params(("id" = String, Path, description = "Country id")),
    responses(
        (status = 200, description = "Country details", body = ApiResponse<CountryResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Country not found")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn get_country(
    _user: AuthenticatedUser,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    let country = service.get_country(&id).await?;
    Ok(Json(ApiResponse::success(Some(country), None, None)))
}

/// Create a country
#[utoipa::path(
    post,
    path = "/api/admin/countries",
    request_body = CountryPayload,
    responses(
        (status = 201, description = "Country created", body = ApiResponse<CountryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 409, description = "Country name already present")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn create_country(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    AppJson(payload): AppJson<CountryPayload>,
) -> Result<(StatusCode, Json<ApiResponse<CountryResponseDto>>)> {
    let country = service.create_country(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(country),
            Some("Country added successfully".to_string()),
            None,
        )),
    ))
}

/// Update a country
#[utoipa::path(
    put,
    path = "/api/admin/countries/{id}",
    params(("id" = String, Path, description = "Country id")),
    request_body = CountryPayload,
    responses(
        (status = 200, description = "Country updated", body = ApiResponse<CountryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Country not found")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn update_country(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CountryPayload>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    let country = service.update_country(&id, payload).await?;
    Ok(Json(ApiResponse::success(
        Some(country),
        Some("Country updated successfully".to_string()),
        None,
    )))
}

/// Delete a country
#[utoipa::path(
    delete,
    path = "/api/admin/countries/{id}",
    params(("id" = String, Path, description = "Country id")),
    responses(
        (status = 200, description = "Country deleted"),
        (status = 403, description = "Admin access required")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn delete_country(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_country(&id).await?;
    Ok(done("Country deleted successfully"))
}

// ==================== State Handlers ====================

/// List all states
#[utoipa::path(
    get,
    path = "/api/states",
    responses(
        (status = 200, description = "List of states", body = ApiResponse<Vec<StateResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn list_states(
    _user: AuthenticatedUser,
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<StateResponseDto>>>> {
    let states = service.list_states().await?;
    Ok(Json(ApiResponse::list(states, "States fetched successfully")))
}

/// Get a state by id
#[utoipa::path(
    get,
    path = "/api/states/{id}",
    params(("id" = String, Path, description = "State id")),
    responses(
        (status = 200, description = "State details", body = ApiResponse<StateResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "State not found")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn get_state(
    _user: AuthenticatedUser,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<StateResponseDto>>> {
    let state = service.get_state(&id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Create a state within an existing country
#[utoipa::path(
    post,
    path = "/api/admin/states",
    request_body = StatePayload,
    responses(
        (status = 201, description = "State created", body = ApiResponse<StateResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Country not found"),
        (status = 409, description = "State name already present")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn create_state(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    AppJson(payload): AppJson<StatePayload>,
) -> Result<(StatusCode, Json<ApiResponse<StateResponseDto>>)> {
    let state = service.create_state(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(state),
            Some("State added successfully".to_string()),
            None,
        )),
    ))
}

/// Update a state
#[utoipa::path(
    put,
    path = "/api/admin/states/{id}",
    params(("id" = String, Path, description = "State id")),
    request_body = StatePayload,
    responses(
        (status = 200, description = "State updated", body = ApiResponse<StateResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "State or country not found")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn update_state(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<StatePayload>,
) -> Result<Json<ApiResponse<StateResponseDto>>> {
    let state = service.update_state(&id, payload).await?;
    Ok(Json(ApiResponse::success(
        Some(state),
        Some("State updated successfully".to_string()),
        None,
    )))
}

/// Delete a state
#[utoipa::path(
    delete,
    path = "/api/admin/states/{id}",
    params(("id" = String, Path, description = "State id")),
    responses(
        (status = 200, description = "State deleted"),
        (status = 403, description = "Admin access required")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn delete_state(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_state(&id).await?;
    Ok(done("State deleted successfully"))
}

// ==================== City Handlers ====================

/// List all cities
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "List of cities", body = ApiResponse<Vec<CityResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn list_cities(
    _user: AuthenticatedUser,
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    let cities = service.list_cities().await?;
    Ok(Json(ApiResponse::list(cities, "Cities fetched successfully")))
}

/// Get a city by id
#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    params(("id" = String, Path, description = "City id")),
    responses(
        (status = 200, description = "City details", body = ApiResponse<CityResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "City not found")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn get_city(
    _user: AuthenticatedUser,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CityResponseDto>>> {
    let city = service.get_city(&id).await?;
    Ok(Json(ApiResponse::success(Some(city), None, None)))
}

/// Create a city within an existing state
#[utoipa::path(
    post,
    path = "/api/admin/cities",
    request_body = CityPayload,
    responses(
        (status = 201, description = "City created", body = ApiResponse<CityResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "State not found"),
        (status = 409, description = "City name already present")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn create_city(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    AppJson(payload): AppJson<CityPayload>,
) -> Result<(StatusCode, Json<ApiResponse<CityResponseDto>>)> {
    let city = service.create_city(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(city),
            Some("City added successfully".to_string()),
            None,
        )),
    ))
}

/// Update a city
#[utoipa::path(
    put,
    path = "/api/admin/cities/{id}",
    params(("id" = String, Path, description = "City id")),
    request_body = CityPayload,
    responses(
        (status = 200, description = "City updated", body = ApiResponse<CityResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "City or state not found")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn update_city(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CityPayload>,
) -> Result<Json<ApiResponse<CityResponseDto>>> {
    let city = service.update_city(&id, payload).await?;
    Ok(Json(ApiResponse::success(
        Some(city),
        Some("City updated successfully".to_string()),
        None,
    )))
}

/// Delete a city
#[utoipa::path(
    delete,
    path = "/api/admin/cities/{id}",
    params(("id" = String, Path, description = "City id")),
    responses(
        (status = 200, description = "City deleted"),
        (status = 403, description = "Admin access required")
    ),
    tag = "regions",
    security(("bearer_auth" = []))
)]
pub async fn delete_city(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_city(&id).await?;
    Ok(done("City deleted successfully"))
}
