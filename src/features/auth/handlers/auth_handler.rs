use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{
    AuthResponseDto, LoginPayload, SignupPayload, UpdatePasswordPayload,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::features::users::dtos::UserResponseDto;
use crate::shared::types::ApiResponse;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// Create an account
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupPayload,
    responses(
        (status = 201, description = "User signed up successfully", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn signup(
    State(service): State<Arc<AuthService>>,
    AppJson(payload): AppJson<SignupPayload>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponseDto>>)> {
    let user = service.signup(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(user),
            Some("User signed up successfully".to_string()),
            None,
        )),
    ))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Invalid credentials format"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(payload): AppJson<LoginPayload>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    let auth_response = service.login(payload).await?;
    Ok(Json(ApiResponse::success(Some(auth_response), None, None)))
}

/// Get current authenticated user info
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<UserResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user_data = service.get_current_user(&user).await?;
    Ok(Json(ApiResponse::success(Some(user_data), None, None)))
}

/// Change the caller's password
#[utoipa::path(
    patch,
    path = "/api/auth/password",
    request_body = UpdatePasswordPayload,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Old password is incorrect"),
        (status = 403, description = "Email does not belong to the caller")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_password(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
    AppJson(payload): AppJson<UpdatePasswordPayload>,
) -> Result<Json<ApiResponse<()>>> {
    service.update_password(&user, payload).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Password updated successfully".to_string()),
        None,
    )))
}
