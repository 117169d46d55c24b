use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::error::Result;
use crate::features::users::dtos::UserResponseDto;
use crate::shared::validation::{
    check, check_allowed_fields, invalid, is_email, is_strong_password, required_str,
    USER_NAME_REGEX,
};

pub const MSG_SIGNUP_MISSING: &str = "Provide all valid fields";
pub const MSG_SIGNUP_EMAIL: &str = "Email is not valid";
pub const MSG_SIGNUP_WEAK_PASSWORD: &str = "Please enter a strong password";
pub const MSG_SIGNUP_PASSWORD_MISMATCH: &str = "Password is not mactching";
pub const MSG_SIGNUP_NAME: &str = "Name should contain only 4 to 10 letters";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid Credentials";
pub const MSG_PASSWORD_MISSING: &str = "Please enter a valid inputs!";
pub const MSG_PASSWORD_EMAIL: &str = "Invalid email Id";
pub const MSG_PASSWORD_WEAK: &str = "Please choose a strong password!";

/// Emails are compared and stored trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validated sign-up data
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for creating an account
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    /// 4 to 10 letters
    #[schema(value_type = String, example = "Ahmed")]
    pub name: Option<Value>,
    #[schema(value_type = String, example = "ahmed@example.com")]
    pub email: Option<Value>,
    /// At least 6 characters with lowercase, uppercase, digit and symbol
    #[schema(value_type = String, example = "Abc123!")]
    pub password: Option<Value>,
    #[schema(value_type = String, example = "Abc123!")]
    pub confirm_password: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl SignupPayload {
    pub fn validate(&self) -> Result<SignupInput> {
        let (Some(name), Some(email), Some(password), Some(confirm_password)) = (
            required_str(&self.name),
            required_str(&self.email),
            required_str(&self.password),
            required_str(&self.confirm_password),
        ) else {
            return Err(invalid(MSG_SIGNUP_MISSING));
        };
        let email = normalize_email(email);
        check(is_email(&email), MSG_SIGNUP_EMAIL)?;
        check(is_strong_password(password), MSG_SIGNUP_WEAK_PASSWORD)?;
        check(password == confirm_password, MSG_SIGNUP_PASSWORD_MISMATCH)?;
        check_allowed_fields(&self.extra)?;
        check(USER_NAME_REGEX.is_match(name), MSG_SIGNUP_NAME)?;

        Ok(SignupInput {
            name: name.to_string(),
            email,
            password: password.to_string(),
        })
    }
}

/// Validated login data
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Request body for logging in
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    #[schema(value_type = String, example = "ahmed@example.com")]
    pub email: Option<Value>,
    #[schema(value_type = String, example = "Abc123!")]
    pub password: Option<Value>,
}

impl LoginPayload {
    /// Every failure reads the same so callers learn nothing about accounts
    pub fn validate(&self) -> Result<LoginInput> {
        let (Some(email), Some(password)) =
            (required_str(&self.email), required_str(&self.password))
        else {
            return Err(invalid(MSG_INVALID_CREDENTIALS));
        };
        let email = normalize_email(email);
        check(is_email(&email), MSG_INVALID_CREDENTIALS)?;

        Ok(LoginInput {
            email,
            password: password.to_string(),
        })
    }
}

/// Validated password change
#[derive(Debug, Clone)]
pub struct UpdatePasswordInput {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

/// Request body for changing the caller's password
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordPayload {
    #[schema(value_type = String, example = "ahmed@example.com")]
    pub email: Option<Value>,
    #[schema(value_type = String, example = "Abc123!")]
    pub old_password: Option<Value>,
    #[schema(value_type = String, example = "Xyz789?")]
    pub new_password: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl UpdatePasswordPayload {
    pub fn validate(&self) -> Result<UpdatePasswordInput> {
        let (Some(email), Some(old_password), Some(new_password)) = (
            required_str(&self.email),
            required_str(&self.old_password),
            required_str(&self.new_password),
        ) else {
            return Err(invalid(MSG_PASSWORD_MISSING));
        };
        let email = normalize_email(email);
        check(is_email(&email), MSG_PASSWORD_EMAIL)?;
        check(is_strong_password(new_password), MSG_PASSWORD_WEAK)?;
        check_allowed_fields(&self.extra)?;

        Ok(UpdatePasswordInput {
            email,
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        })
    }
}

/// Response DTO for a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    /// HS256 JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiry time in seconds
    pub expires_in: i64,
    pub user: UserResponseDto,
}
