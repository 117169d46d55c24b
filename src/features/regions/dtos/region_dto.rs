use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::error::Result;
use crate::features::regions::models::{
    City, CityInput, Country, CountryInput, State, StateInput,
};
use crate::shared::types::RecordId;
use crate::shared::validation::{
    check, check_allowed_fields, check_path_id, invalid, is_alpha, parse_reference, required_str,
    MSG_INVALID_INPUTS, MSG_MISSING_INPUTS,
};

// ==================== Request schemas ====================
//
// Each schema lists exactly the keys its entity accepts. Values stay raw JSON so
// the type check happens in `validate`, in its fixed place in the check order;
// any other key is collected into `extra` and rejected there.

/// Request body for creating or updating a country
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryPayload {
    /// Letters only
    #[schema(value_type = String, example = "Germany")]
    pub name: Option<Value>,
    /// Letters only
    #[schema(value_type = String, example = "DE")]
    pub code: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl CountryPayload {
    /// `id` is the path id on update, `None` on create
    pub fn validate(&self, id: Option<&str>) -> Result<CountryInput> {
        let (Some(name), Some(code)) = (required_str(&self.name), required_str(&self.code)) else {
            return Err(invalid(MSG_MISSING_INPUTS));
        };
        check_allowed_fields(&self.extra)?;
        check(is_alpha(name) && is_alpha(code), MSG_INVALID_INPUTS)?;
        check_path_id(id)?;

        Ok(CountryInput {
            name: name.to_string(),
            code: code.to_string(),
        })
    }
}

/// Request body for creating or updating a state
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatePayload {
    #[schema(value_type = String, example = "Bavaria")]
    pub name: Option<Value>,
    /// Id of an existing country
    #[schema(value_type = String, example = "0192a4c5e0b27d3e8f1a2b3c4d5e6f70")]
    pub country_id: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl StatePayload {
    pub fn validate(&self, id: Option<&str>) -> Result<StateInput> {
        let (Some(name), Some(country_id)) =
            (required_str(&self.name), required_str(&self.country_id))
        else {
            return Err(invalid(MSG_MISSING_INPUTS));
        };
        check_allowed_fields(&self.extra)?;
        check(is_alpha(name), MSG_INVALID_INPUTS)?;
        let country_id = parse_reference(country_id)?;
        check_path_id(id)?;

        Ok(StateInput {
            name: name.to_string(),
            country_id,
        })
    }
}

/// Request body for creating or updating a city
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityPayload {
    #[schema(value_type = String, example = "Munich")]
    pub name: Option<Value>,
    /// Id of an existing state
    #[schema(value_type = String, example = "0192a4c5e0b27d3e8f1a2b3c4d5e6f70")]
    pub state_id: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl CityPayload {
    pub fn validate(&self, id: Option<&str>) -> Result<CityInput> {
        let (Some(name), Some(state_id)) =
            (required_str(&self.name), required_str(&self.state_id))
        else {
            return Err(invalid(MSG_MISSING_INPUTS));
        };
        check_allowed_fields(&self.extra)?;
        check(is_alpha(name), MSG_INVALID_INPUTS)?;
        let state_id = parse_reference(state_id)?;
        check_path_id(id)?;

        Ok(CityInput {
            name: name.to_string(),
            state_id,
        })
    }
}

// ==================== Responses ====================

/// Response DTO for country data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponseDto {
    pub id: RecordId,
    pub name: String,
    pub code: String,
}

impl From<Country> for CountryResponseDto {
    fn from(country: Country) -> Self {
        Self {
            id: country.id.into(),
            name: country.name,
            code: country.code,
        }
    }
}

/// Response DTO for state data, with its country expanded.
///
/// `country` is `null` when the referenced country no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateResponseDto {
    pub id: RecordId,
    pub name: String,
    pub country_id: RecordId,
    pub country: Option<CountryResponseDto>,
}

impl StateResponseDto {
    pub fn new(state: State, country: Option<Country>) -> Self {
        Self {
            id: state.id.into(),
            name: state.name,
            country_id: state.country_id.into(),
            country: country.map(Into::into),
        }
    }
}

/// Response DTO for city data, with state and country expanded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponseDto {
    pub id: RecordId,
    pub name: String,
    pub state_id: RecordId,
    pub state: Option<StateResponseDto>,
}

impl CityResponseDto {
    pub fn new(city: City, state: Option<StateResponseDto>) -> Self {
        Self {
            id: city.id.into(),
            name: city.name,
            state_id: city.state_id.into(),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::MSG_DISALLOWED_FIELDS;
    use serde_json::json;
    use uuid::Uuid;

    fn country(body: Value) -> CountryPayload {
        serde_json::from_value(body).unwrap()
    }

    fn error_message(result: Result<impl std::fmt::Debug>) -> String {
        result.unwrap_err().message()
    }

    #[test]
    fn test_country_valid() {
        let input = country(json!({"name": "Germany", "code": "DE"}))
            .validate(None)
            .unwrap();
        assert_eq!(input.name, "Germany");
        assert_eq!(input.code, "DE");
    }

    #[test]
    fn test_country_missing_or_wrong_type() {
        assert_eq!(
            error_message(country(json!({"name": "Germany"})).validate(None)),
            MSG_MISSING_INPUTS
        );
        assert_eq!(
            error_message(country(json!({"name": "Germany", "code": 49})).validate(None)),
            MSG_MISSING_INPUTS
        );
        assert_eq!(
            error_message(country(json!({"name": "", "code": "DE"})).validate(None)),
            MSG_MISSING_INPUTS
        );
    }

    #[test]
    fn test_country_disallowed_field() {
        let payload = country(json!({"name": "Germany", "code": "DE", "capital": "Berlin"}));
        assert_eq!(payload.extra.len(), 1);
        assert_eq!(error_message(payload.validate(None)), MSG_DISALLOWED_FIELDS);
    }

    #[test]
    fn test_country_format() {
        assert_eq!(
            error_message(country(json!({"name": "123", "code": "DE"})).validate(None)),
            MSG_INVALID_INPUTS
        );
        assert_eq!(
            error_message(country(json!({"name": "Germany", "code": "D1"})).validate(None)),
            MSG_INVALID_INPUTS
        );
    }

    #[test]
    fn test_presence_is_checked_before_allowed_fields() {
        let payload = country(json!({"name": "Germany", "capital": "Berlin"}));
        assert_eq!(error_message(payload.validate(None)), MSG_MISSING_INPUTS);
    }

    #[test]
    fn test_allowed_fields_checked_before_format() {
        let payload = country(json!({"name": "123", "code": "DE", "capital": "Berlin"}));
        assert_eq!(error_message(payload.validate(None)), MSG_DISALLOWED_FIELDS);
    }

    #[test]
    fn test_update_path_id_must_be_alphanumeric() {
        let payload = country(json!({"name": "Germany", "code": "DE"}));
        assert!(payload.validate(Some("abc123")).is_ok());
        assert_eq!(
            error_message(payload.validate(Some("abc-123"))),
            MSG_INVALID_INPUTS
        );
    }

    #[test]
    fn test_state_reference_format() {
        let country_id = Uuid::now_v7();
        let payload: StatePayload = serde_json::from_value(
            json!({"name": "Bavaria", "countryId": country_id.simple().to_string()}),
        )
        .unwrap();
        assert_eq!(payload.validate(None).unwrap().country_id, country_id);

        let payload: StatePayload =
            serde_json::from_value(json!({"name": "Bavaria", "countryId": "not-an-id"})).unwrap();
        assert_eq!(error_message(payload.validate(None)), MSG_INVALID_INPUTS);
    }

    #[test]
    fn test_city_requires_state_id() {
        let payload: CityPayload = serde_json::from_value(json!({"name": "Munich"})).unwrap();
        assert_eq!(error_message(payload.validate(None)), MSG_MISSING_INPUTS);
    }
}
