use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::masjids::dtos::{check_masjid_id, ChartFile, MasjidPayload, MasjidResponseDto};
use crate::features::masjids::models::Masjid;
use crate::features::masjids::repositories::MasjidRepository;
use crate::features::regions::models::City;
use crate::features::regions::services::CityStore;
use crate::modules::storage::ChartStorage;
use crate::shared::types::RecordId;

pub type MasjidStore = Arc<dyn MasjidRepository>;

/// Service for masjids and their timing charts
pub struct MasjidService {
    masjids: MasjidStore,
    cities: CityStore,
    storage: Arc<dyn ChartStorage>,
}

impl MasjidService {
    pub fn new(masjids: MasjidStore, cities: CityStore, storage: Arc<dyn ChartStorage>) -> Self {
        Self {
            masjids,
            cities,
            storage,
        }
    }

    pub async fn list_masjids(&self) -> Result<Vec<MasjidResponseDto>> {
        let masjids = self.masjids.find_all().await?;

        let city_ids: Vec<Uuid> = masjids
            .iter()
            .map(|m| m.city_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let cities: HashMap<Uuid, City> = self
            .cities
            .find_by_ids(&city_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(masjids
            .into_iter()
            .map(|masjid| {
                let city = cities.get(&masjid.city_id).cloned();
                MasjidResponseDto::new(masjid, city)
            })
            .collect())
    }

    pub async fn get_masjid(&self, id: &str) -> Result<MasjidResponseDto> {
        let masjid = self
            .find_masjid(id)
            .await?
            .ok_or_else(|| AppError::NotFound("masjid is not found".to_string()))?;
        let city = self.cities.find_by_id(masjid.city_id).await?;
        Ok(MasjidResponseDto::new(masjid, city))
    }

    pub async fn create_masjid(&self, payload: MasjidPayload) -> Result<MasjidResponseDto> {
        let input = payload.validate(None)?;
        let city = self.require_city(input.city_id).await?;

        let masjid = self.masjids.insert(input).await?;
        tracing::info!(
            "Masjid created: id={}, name={}, city_id={}",
            masjid.id,
            masjid.name,
            masjid.city_id
        );

        Ok(MasjidResponseDto::new(masjid, Some(city)))
    }

    pub async fn update_masjid(
        &self,
        id: &str,
        payload: MasjidPayload,
    ) -> Result<MasjidResponseDto> {
        let input = payload.validate(Some(id))?;
        let not_found = || AppError::NotFound("masjid is not found!".to_string());

        let existing = self.find_masjid(id).await?.ok_or_else(not_found)?;
        let city = self.require_city(input.city_id).await?;

        let masjid = self
            .masjids
            .update(existing.id, input)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Masjid updated: id={}", masjid.id);

        Ok(MasjidResponseDto::new(masjid, Some(city)))
    }

    pub async fn delete_masjid(&self, id: &str) -> Result<()> {
        if let Some(id) = RecordId::parse(id) {
            self.masjids.delete(id.uuid()).await?;
            tracing::info!("Masjid deleted: id={}", id);
        }
        Ok(())
    }

    /// Store a timing chart image and point the masjid at it.
    ///
    /// Nothing reaches storage unless the id and the file pass their checks
    /// and the masjid exists.
    pub async fn upload_timing_chart(&self, id: &str, file: ChartFile) -> Result<MasjidResponseDto> {
        check_masjid_id(id)?;
        file.check()?;

        let masjid = self
            .find_masjid(id)
            .await?
            .ok_or_else(|| AppError::NotFound("masjid is not found".to_string()))?;

        let extension = file.extension();
        let path = format!(
            "timing-charts/{}/{}.{}",
            masjid.id.simple(),
            Uuid::new_v4().simple(),
            extension
        );
        let size = file.data.len();
        let url = self
            .storage
            .store(&path, file.data, &file.content_type)
            .await?;

        let masjid = self
            .masjids
            .set_timing_chart(masjid.id, &url)
            .await?
            .ok_or_else(|| AppError::NotFound("masjid is not found".to_string()))?;
        tracing::info!(
            "Timing chart uploaded: masjid_id={}, size={}, url={}",
            masjid.id,
            size,
            url
        );

        let city = self.cities.find_by_id(masjid.city_id).await?;
        Ok(MasjidResponseDto::new(masjid, city))
    }

    async fn find_masjid(&self, id: &str) -> Result<Option<Masjid>> {
        match RecordId::parse(id) {
            Some(id) => self.masjids.find_by_id(id.uuid()).await,
            None => Ok(None),
        }
    }

    async fn require_city(&self, id: Uuid) -> Result<City> {
        self.cities
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("city is not found".to_string()))
    }
}
