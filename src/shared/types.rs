use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::is_alphanumeric;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Success envelope for list endpoints; `meta.total` carries the item count
    pub fn list(items: Vec<T>, message: &str) -> Self {
        let total = items.len() as i64;
        Self::success(Some(items), Some(message.to_string()), Some(Meta { total }))
    }
}

// =============================================================================
// RECORD IDENTIFIERS
// =============================================================================

/// Public identifier of a stored record.
///
/// Rendered as 32 lowercase hex characters (a hyphen-free UUID) so that every
/// identifier handed out by the API passes the alphanumeric id check when it is
/// sent back in a path or a reference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ToSchema)]
#[schema(value_type = String, example = "0192a4c5e0b27d3e8f1a2b3c4d5e6f70")]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Parse an identifier; `None` unless it is alphanumeric and a valid UUID
    pub fn parse(raw: &str) -> Option<Self> {
        if !is_alphanumeric(raw) {
            return None;
        }
        Uuid::try_parse(raw).ok().map(Self)
    }

    pub fn uuid(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RecordId::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid record id '{}'", raw)))
    }
}
