use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::error::Result;
use crate::features::masjids::models::{
    Masjid, MasjidInput, MasjidNamaazTiming, Namaaz, NamaazInput, TimingInput,
};
use crate::features::regions::models::City;
use crate::shared::types::RecordId;
use crate::shared::validation::{
    check, check_allowed_fields, check_path_id, invalid, is_alpha, optional_str,
    parse_reference, required_str, MSG_INVALID_INPUTS, MSG_MISSING_INPUTS,
};

// ==================== Request schemas ====================

/// Request body for creating or updating a masjid
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasjidPayload {
    /// Letters only
    #[schema(value_type = String, example = "Jamia")]
    pub name: Option<Value>,
    /// Free text, optional
    #[schema(value_type = Option<String>, example = "Main city masjid")]
    pub desc: Option<Value>,
    /// Id of an existing city
    #[schema(value_type = String, example = "0192a4c5e0b27d3e8f1a2b3c4d5e6f70")]
    pub city_id: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl MasjidPayload {
    /// `id` is the path id on update, `None` on create
    pub fn validate(&self, id: Option<&str>) -> Result<MasjidInput> {
        let (Some(name), Some(city_id)) = (required_str(&self.name), required_str(&self.city_id))
        else {
            return Err(invalid(MSG_MISSING_INPUTS));
        };
        let desc = optional_str(&self.desc)?;
        check_allowed_fields(&self.extra)?;
        check(is_alpha(name), MSG_INVALID_INPUTS)?;
        let city_id = parse_reference(city_id)?;
        check_path_id(id)?;

        Ok(MasjidInput {
            name: name.to_string(),
            description: desc.map(str::to_string),
            city_id,
        })
    }
}

/// Request body for creating or updating a namaaz
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamaazPayload {
    #[schema(value_type = String, example = "Fajr")]
    pub name: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl NamaazPayload {
    pub fn validate(&self, id: Option<&str>) -> Result<NamaazInput> {
        let Some(name) = required_str(&self.name) else {
            return Err(invalid(MSG_MISSING_INPUTS));
        };
        check_allowed_fields(&self.extra)?;
        check(is_alpha(name), MSG_INVALID_INPUTS)?;
        check_path_id(id)?;

        Ok(NamaazInput {
            name: name.to_string(),
        })
    }
}

/// Request body for creating or updating a masjid namaaz timing.
///
/// The times are stored as given; only their presence is checked.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimingPayload {
    #[schema(value_type = String, example = "05:10")]
    pub azaan_time: Option<Value>,
    #[schema(value_type = String, example = "05:30")]
    pub jamaat_time: Option<Value>,
    #[schema(value_type = String, example = "0192a4c5e0b27d3e8f1a2b3c4d5e6f70")]
    pub masjid_id: Option<Value>,
    #[schema(value_type = String, example = "0192a4c5e0b27d3e8f1a2b3c4d5e6f71")]
    pub namaaz_id: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, Value>,
}

impl TimingPayload {
    pub fn validate(&self, id: Option<&str>) -> Result<TimingInput> {
        let (Some(azaan_time), Some(jamaat_time), Some(masjid_id), Some(namaaz_id)) = (
            required_str(&self.azaan_time),
            required_str(&self.jamaat_time),
            required_str(&self.masjid_id),
            required_str(&self.namaaz_id),
        ) else {
            return Err(invalid(MSG_MISSING_INPUTS));
        };
        check_allowed_fields(&self.extra)?;
        let masjid_id = parse_reference(masjid_id)?;
        let namaaz_id = parse_reference(namaaz_id)?;
        check_path_id(id)?;

        Ok(TimingInput {
            azaan_time: azaan_time.to_string(),
            jamaat_time: jamaat_time.to_string(),
            masjid_id,
            namaaz_id,
        })
    }
}

// ==================== Responses ====================

/// City a masjid is located in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasjidCityDto {
    pub id: RecordId,
    pub name: String,
    pub state_id: RecordId,
}

impl From<City> for MasjidCityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id.into(),
            name: city.name,
            state_id: city.state_id.into(),
        }
    }
}

/// Response DTO for masjid data; `city` is `null` when the city is gone
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasjidResponseDto {
    pub id: RecordId,
    pub name: String,
    pub desc: Option<String>,
    pub city_id: RecordId,
    pub city: Option<MasjidCityDto>,
    pub timing_chart_url: Option<String>,
}

impl MasjidResponseDto {
    pub fn new(masjid: Masjid, city: Option<City>) -> Self {
        Self {
            id: masjid.id.into(),
            name: masjid.name,
            desc: masjid.description,
            city_id: masjid.city_id.into(),
            city: city.map(Into::into),
            timing_chart_url: masjid.timing_chart_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamaazResponseDto {
    pub id: RecordId,
    pub name: String,
}

impl From<Namaaz> for NamaazResponseDto {
    fn from(namaaz: Namaaz) -> Self {
        Self {
            id: namaaz.id.into(),
            name: namaaz.name,
        }
    }
}

/// Masjid as embedded in a timing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasjidSummaryDto {
    pub id: RecordId,
    pub name: String,
}

impl From<Masjid> for MasjidSummaryDto {
    fn from(masjid: Masjid) -> Self {
        Self {
            id: masjid.id.into(),
            name: masjid.name,
        }
    }
}

/// Response DTO for a masjid namaaz timing, with masjid and namaaz expanded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimingResponseDto {
    pub id: RecordId,
    pub azaan_time: String,
    pub jamaat_time: String,
    pub masjid_id: RecordId,
    pub masjid: Option<MasjidSummaryDto>,
    pub namaaz_id: RecordId,
    pub namaaz: Option<NamaazResponseDto>,
}

impl TimingResponseDto {
    pub fn new(timing: MasjidNamaazTiming, masjid: Option<Masjid>, namaaz: Option<Namaaz>) -> Self {
        Self {
            id: timing.id.into(),
            azaan_time: timing.azaan_time,
            jamaat_time: timing.jamaat_time,
            masjid_id: timing.masjid_id.into(),
            masjid: masjid.map(Into::into),
            namaaz_id: timing.namaaz_id.into(),
            namaaz: namaaz.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::MSG_DISALLOWED_FIELDS;
    use serde_json::json;
    use uuid::Uuid;

    fn parse<T: serde::de::DeserializeOwned>(body: Value) -> T {
        serde_json::from_value(body).unwrap()
    }

    fn id() -> String {
        Uuid::now_v7().simple().to_string()
    }

    #[test]
    fn test_masjid_desc_is_optional() {
        let city_id = id();
        let input = parse::<MasjidPayload>(json!({"name": "Jamia", "cityId": city_id}))
            .validate(None)
            .unwrap();
        assert_eq!(input.description, None);

        let input = parse::<MasjidPayload>(
            json!({"name": "Jamia", "desc": "Old town", "cityId": city_id}),
        )
        .validate(None)
        .unwrap();
        assert_eq!(input.description.as_deref(), Some("Old town"));
    }

    #[test]
    fn test_masjid_desc_must_be_a_string() {
        let payload: MasjidPayload = parse(json!({"name": "Jamia", "desc": 7, "cityId": id()}));
        assert_eq!(payload.validate(None).unwrap_err().message(), MSG_MISSING_INPUTS);
    }

    #[test]
    fn test_masjid_name_must_be_letters() {
        let payload: MasjidPayload = parse(json!({"name": "Jamia 2", "cityId": id()}));
        assert_eq!(payload.validate(None).unwrap_err().message(), MSG_INVALID_INPUTS);
    }

    #[test]
    fn test_missing_field_wins_over_extra_field() {
        let payload: NamaazPayload = parse(json!({"time": "05:00"}));
        assert_eq!(payload.validate(None).unwrap_err().message(), MSG_MISSING_INPUTS);
    }

    #[test]
    fn test_namaaz_extra_field() {
        let payload: NamaazPayload = parse(json!({"name": "Fajr", "rakat": 2}));
        assert_eq!(
            payload.validate(None).unwrap_err().message(),
            MSG_DISALLOWED_FIELDS
        );
    }

    #[test]
    fn test_timing_times_are_not_format_checked() {
        let payload: TimingPayload = parse(json!({
            "azaanTime": "after sunrise",
            "jamaatTime": "5:30am",
            "masjidId": id(),
            "namaazId": id(),
        }));
        let input = payload.validate(None).unwrap();
        assert_eq!(input.azaan_time, "after sunrise");
    }

    #[test]
    fn test_timing_references_must_be_ids() {
        let payload: TimingPayload = parse(json!({
            "azaanTime": "05:10",
            "jamaatTime": "05:30",
            "masjidId": "masjid-one",
            "namaazId": id(),
        }));
        assert_eq!(payload.validate(None).unwrap_err().message(), MSG_INVALID_INPUTS);
    }

    #[test]
    fn test_masjid_response_renames_description() {
        let now = chrono::Utc::now();
        let masjid = Masjid {
            id: Uuid::now_v7(),
            name: "Jamia".to_string(),
            description: Some("Old town".to_string()),
            city_id: Uuid::now_v7(),
            timing_chart_url: None,
            created_at: now,
            updated_at: now,
        };
        let body = serde_json::to_value(MasjidResponseDto::new(masjid, None)).unwrap();
        assert_eq!(body["desc"], "Old town");
        assert_eq!(body["city"], Value::Null);
        assert_eq!(body["timingChartUrl"], Value::Null);
    }
}
