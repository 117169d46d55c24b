use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::model::UserRole;
use crate::features::users::models::User;
use crate::shared::types::RecordId;
use crate::shared::validation::{
    check_allowed_fields, check_path_id, invalid, parse_reference, required_str,
    MSG_MISSING_INPUTS,
};

/// Public view of an account; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub masjids: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name,
            email: user.email,
            role: user.role,
            masjids: user.masjid_ids.into_iter().map(Into::into).collect(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for attaching a masjid to a user
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignMasjidPayload {
    #[schema(value_type = String, example = "0192a4c5e0b27d3e8f1a2b3c4d5e6f70")]
    pub masjid_id: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl AssignMasjidPayload {
    /// `user_id` is the path id
    pub fn validate(&self, user_id: &str) -> Result<Uuid> {
        let Some(masjid_id) = required_str(&self.masjid_id) else {
            return Err(invalid(MSG_MISSING_INPUTS));
        };
        check_allowed_fields(&self.extra)?;
        let masjid_id = parse_reference(masjid_id)?;
        check_path_id(Some(user_id))?;
        Ok(masjid_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{MSG_DISALLOWED_FIELDS, MSG_INVALID_INPUTS};
    use serde_json::json;

    #[test]
    fn test_response_hides_password_hash() {
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: "Ahmed".to_string(),
            email: "ahmed@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: UserRole::Admin,
            masjid_ids: vec![Uuid::now_v7()],
            created_at: now,
            updated_at: now,
        };
        let body = serde_json::to_value(UserResponseDto::from(user)).unwrap();
        assert!(body.get("passwordHash").is_none());
        assert_eq!(body["role"], "admin");
        assert_eq!(body["masjids"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_assign_masjid_validation() {
        let masjid_id = Uuid::now_v7();
        let payload: AssignMasjidPayload =
            serde_json::from_value(json!({"masjidId": masjid_id.simple().to_string()})).unwrap();
        assert_eq!(payload.validate("abc123").unwrap(), masjid_id);
        assert_eq!(
            payload.validate("abc-123").unwrap_err().message(),
            MSG_INVALID_INPUTS
        );

        let payload: AssignMasjidPayload = serde_json::from_value(
            json!({"masjidId": masjid_id.simple().to_string(), "role": "admin"}),
        )
        .unwrap();
        assert_eq!(
            payload.validate("abc123").unwrap_err().message(),
            MSG_DISALLOWED_FIELDS
        );
    }
}
