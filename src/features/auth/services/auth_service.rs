use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, LoginPayload, SignupPayload, UpdatePasswordPayload,
    MSG_INVALID_CREDENTIALS,
};
use crate::features::auth::model::{AuthenticatedUser, UserRole};
use crate::features::auth::services::password_service::{hash_password, verify_password};
use crate::features::auth::services::token_service::TokenService;
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::NewUser;
use crate::features::users::services::UserStore;

/// Service for authentication operations (signup, login, password change)
pub struct AuthService {
    users: UserStore,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: UserStore, token_service: Arc<TokenService>) -> Self {
        Self {
            users,
            token_service,
        }
    }

    /// Create an account with the default `user` role
    pub async fn signup(&self, payload: SignupPayload) -> Result<UserResponseDto> {
        let input = payload.validate()?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict("email already exists".to_string()));
        }

        let password_hash = hash_password(&input.password)?;
        let user = self
            .users
            .insert(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
                role: UserRole::User,
            })
            .await?;
        tracing::info!("User signed up: id={}", user.id);

        Ok(user.into())
    }

    /// Login with email and password
    pub async fn login(&self, payload: LoginPayload) -> Result<AuthResponseDto> {
        let input = payload.validate()?;
        let rejected = || AppError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string());

        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or_else(rejected)?;

        if !verify_password(&input.password, &user.password_hash) {
            tracing::debug!("Password mismatch for user {}", user.id);
            return Err(rejected());
        }

        let token = self.token_service.issue(user.id, &user.email, user.role)?;
        tracing::info!("User logged in: id={}", user.id);

        Ok(AuthResponseDto {
            access_token: token.access_token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
            user: user.into(),
        })
    }

    /// Get current user info (for /me endpoint)
    pub async fn get_current_user(&self, caller: &AuthenticatedUser) -> Result<UserResponseDto> {
        self.users
            .find_by_id(caller.user_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("user is not found".to_string()))
    }

    /// Change the caller's own password after checking the old one
    pub async fn update_password(
        &self,
        caller: &AuthenticatedUser,
        payload: UpdatePasswordPayload,
    ) -> Result<()> {
        let input = payload.validate()?;

        if input.email != caller.email {
            return Err(AppError::Forbidden(
                "You can only change your own password".to_string(),
            ));
        }

        let user = self
            .users
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user is not found".to_string()))?;

        if !verify_password(&input.old_password, &user.password_hash) {
            return Err(AppError::Unauthorized(
                "Old password is incorrect".to_string(),
            ));
        }

        let password_hash = hash_password(&input.new_password)?;
        self.users
            .update_password(user.id, &password_hash)
            .await?
            .ok_or_else(|| AppError::NotFound("user is not found".to_string()))?;
        tracing::info!("Password updated for user {}", user.id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::User;
    use crate::shared::memory::MemoryRepository;
    use crate::shared::test_helpers::test_token_service;
    use serde_json::json;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(MemoryRepository::<User>::new()),
            test_token_service(),
        )
    }

    fn payload<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> T {
        serde_json::from_value(body).unwrap()
    }

    async fn sign_up(service: &AuthService) -> UserResponseDto {
        service
            .signup(payload(json!({
                "name": "Ahmed",
                "email": "Ahmed@example.com",
                "password": "Abc123!",
                "confirmPassword": "Abc123!",
            })))
            .await
            .unwrap()
    }

    async fn caller(service: &AuthService) -> AuthenticatedUser {
        let login = service
            .login(payload(json!({"email": "ahmed@example.com", "password": "Abc123!"})))
            .await
            .unwrap();
        test_token_service().validate(&login.access_token).unwrap()
    }

    #[tokio::test]
    async fn test_signup_creates_plain_user() {
        let service = service();
        let user = sign_up(&service).await;
        assert_eq!(user.email, "ahmed@example.com");
        assert_eq!(user.role, UserRole::User);
        assert!(user.masjids.is_empty());
    }

    #[tokio::test]
    async fn test_signup_rejects_taken_email() {
        let service = service();
        sign_up(&service).await;

        let err = service
            .signup(payload(json!({
                "name": "Other",
                "email": "ahmed@example.com",
                "password": "Xyz789?",
                "confirmPassword": "Xyz789?",
            })))
            .await
            .unwrap_err();
        assert_eq!(err.status_code().as_u16(), 409);
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let service = service();
        let user = sign_up(&service).await;

        let caller = caller(&service).await;
        assert_eq!(caller.user_id, user.id.uuid());
        assert_eq!(caller.role, UserRole::User);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = service();
        sign_up(&service).await;

        let err = service
            .login(payload(json!({"email": "ahmed@example.com", "password": "Abc123?"})))
            .await
            .unwrap_err();
        assert_eq!(err.status_code().as_u16(), 401);
        assert_eq!(err.message(), "Invalid Credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let err = service()
            .login(payload(json!({"email": "nobody@example.com", "password": "Abc123!"})))
            .await
            .unwrap_err();
        assert_eq!(err.status_code().as_u16(), 401);
    }

    #[tokio::test]
    async fn test_update_password_flow() {
        let service = service();
        sign_up(&service).await;
        let caller = caller(&service).await;

        service
            .update_password(
                &caller,
                payload(json!({
                    "email": "ahmed@example.com",
                    "oldPassword": "Abc123!",
                    "newPassword": "Xyz789?",
                })),
            )
            .await
            .unwrap();

        assert!(service
            .login(payload(json!({"email": "ahmed@example.com", "password": "Abc123!"})))
            .await
            .is_err());
        assert!(service
            .login(payload(json!({"email": "ahmed@example.com", "password": "Xyz789?"})))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_update_password_checks() {
        let service = service();
        sign_up(&service).await;
        let caller = caller(&service).await;

        let err = service
            .update_password(
                &caller,
                payload(json!({
                    "email": "someone@example.com",
                    "oldPassword": "Abc123!",
                    "newPassword": "Xyz789?",
                })),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code().as_u16(), 403);

        let err = service
            .update_password(
                &caller,
                payload(json!({
                    "email": "ahmed@example.com",
                    "oldPassword": "Wrong1!",
                    "newPassword": "Xyz789?",
                })),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code().as_u16(), 401);
    }
}
