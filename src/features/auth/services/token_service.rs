use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, UserRole};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    role: UserRole,
    iss: String,
    iat: i64,
    exp: i64,
}

/// A freshly signed access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Issues and validates the HS256 access tokens handed out on login
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
    leeway: u64,
}

impl TokenService {
    pub fn new(secret: String, issuer: String, ttl: Duration, leeway: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            ttl,
            leeway: leeway.as_secs(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.clone(),
            config.issuer.clone(),
            config.token_ttl,
            config.jwt_leeway,
        )
    }

    pub fn issue(&self, user_id: Uuid, email: &str, role: UserRole) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let expires_in = self.ttl.as_secs() as i64;
        let claims = Claims {
            sub: user_id.simple().to_string(),
            email: email.to_string(),
            role,
            iss: self.issuer.clone(),
            iat: now,
            exp: now + expires_in,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            access_token,
            expires_in,
        })
    }

    pub fn validate(&self, token: &str) -> Result<AuthenticatedUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.leeway = self.leeway;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

        let user_id = Uuid::try_parse(&data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            email: data.claims.email,
            role: data.claims.role,
        })
    }
}
