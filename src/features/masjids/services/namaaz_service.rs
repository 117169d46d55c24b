use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::masjids::dtos::{
    NamaazPayload, NamaazResponseDto, TimingPayload, TimingResponseDto,
};
use crate::features::masjids::models::{
    Masjid, MasjidNamaazTiming, Namaaz, NamaazInput, TimingInput,
};
use crate::features::masjids::services::MasjidStore;
use crate::shared::repository::{NamedRepository, Repository};
use crate::shared::types::RecordId;

pub type NamaazStore = Arc<dyn NamedRepository<Namaaz, NamaazInput>>;
pub type TimingStore = Arc<dyn Repository<MasjidNamaazTiming, TimingInput>>;

/// Service for prayer names and the per-masjid timings that reference them
pub struct NamaazService {
    namaaz: NamaazStore,
    timings: TimingStore,
    masjids: MasjidStore,
}

fn record_id(raw: &str) -> Option<Uuid> {
    RecordId::parse(raw).map(RecordId::uuid)
}

impl NamaazService {
    pub fn new(namaaz: NamaazStore, timings: TimingStore, masjids: MasjidStore) -> Self {
        Self {
            namaaz,
            timings,
            masjids,
        }
    }

    // ==================== Namaaz ====================

    pub async fn list_namaaz(&self) -> Result<Vec<NamaazResponseDto>> {
        let namaaz = self.namaaz.find_all().await?;
        Ok(namaaz.into_iter().map(Into::into).collect())
    }

    pub async fn get_namaaz(&self, id: &str) -> Result<NamaazResponseDto> {
        self.find_namaaz(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("namaaz is not found".to_string()))
    }

    pub async fn create_namaaz(&self, payload: NamaazPayload) -> Result<NamaazResponseDto> {
        let input = payload.validate(None)?;

        if self.namaaz.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "{} namaaz is already present",
                input.name
            )));
        }

        let namaaz = self.namaaz.insert(input).await?;
        tracing::info!("Namaaz created: id={}, name={}", namaaz.id, namaaz.name);

        Ok(namaaz.into())
    }

    pub async fn update_namaaz(
        &self,
        id: &str,
        payload: NamaazPayload,
    ) -> Result<NamaazResponseDto> {
        let input = payload.validate(Some(id))?;
        let not_found = || AppError::NotFound("namaaz is not found!".to_string());

        let existing = self.find_namaaz(id).await?.ok_or_else(not_found)?;

        let namaaz = self
            .namaaz
            .update(existing.id, input)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Namaaz updated: id={}", namaaz.id);

        Ok(namaaz.into())
    }

    pub async fn delete_namaaz(&self, id: &str) -> Result<()> {
        if let Some(id) = record_id(id) {
            self.namaaz.delete(id).await?;
            tracing::info!("Namaaz deleted: id={}", id);
        }
        Ok(())
    }

    async fn find_namaaz(&self, id: &str) -> Result<Option<Namaaz>> {
        match record_id(id) {
            Some(id) => self.namaaz.find_by_id(id).await,
            None => Ok(None),
        }
    }

    // ==================== Masjid namaaz timings ====================

    pub async fn list_timings(&self) -> Result<Vec<TimingResponseDto>> {
        let timings = self.timings.find_all().await?;
        self.expand_timings(timings).await
    }

    pub async fn get_timing(&self, id: &str) -> Result<TimingResponseDto> {
        let timing = self
            .find_timing(id)
            .await?
            .ok_or_else(|| AppError::NotFound("masjid namaaz timing is not found".to_string()))?;
        let masjid = self.masjids.find_by_id(timing.masjid_id).await?;
        let namaaz = self.namaaz.find_by_id(timing.namaaz_id).await?;
        Ok(TimingResponseDto::new(timing, masjid, namaaz))
    }

    pub async fn create_timing(&self, payload: TimingPayload) -> Result<TimingResponseDto> {
        let input = payload.validate(None)?;
        let (masjid, namaaz) = self.require_parents(&input).await?;

        let timing = self.timings.insert(input).await?;
        tracing::info!(
            "Masjid namaaz timing created: id={}, masjid_id={}, namaaz_id={}",
            timing.id,
            timing.masjid_id,
            timing.namaaz_id
        );

        Ok(TimingResponseDto::new(timing, Some(masjid), Some(namaaz)))
    }

    pub async fn update_timing(
        &self,
        id: &str,
        payload: TimingPayload,
    ) -> Result<TimingResponseDto> {
        let input = payload.validate(Some(id))?;
        let not_found = || AppError::NotFound("masjid namaaz timing is not found!".to_string());

        let existing = self.find_timing(id).await?.ok_or_else(not_found)?;
        let (masjid, namaaz) = self.require_parents(&input).await?;

        let timing = self
            .timings
            .update(existing.id, input)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Masjid namaaz timing updated: id={}", timing.id);

        Ok(TimingResponseDto::new(timing, Some(masjid), Some(namaaz)))
    }

    pub async fn delete_timing(&self, id: &str) -> Result<()> {
        if let Some(id) = record_id(id) {
            self.timings.delete(id).await?;
            tracing::info!("Masjid namaaz timing deleted: id={}", id);
        }
        Ok(())
    }

    async fn find_timing(&self, id: &str) -> Result<Option<MasjidNamaazTiming>> {
        match record_id(id) {
            Some(id) => self.timings.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Both references of a timing must exist, masjid checked first
    async fn require_parents(&self, input: &TimingInput) -> Result<(Masjid, Namaaz)> {
        let masjid = self
            .masjids
            .find_by_id(input.masjid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("masjid is not found".to_string()))?;
        let namaaz = self
            .namaaz
            .find_by_id(input.namaaz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("namaaz is not found".to_string()))?;
        Ok((masjid, namaaz))
    }

    async fn expand_timings(
        &self,
        timings: Vec<MasjidNamaazTiming>,
    ) -> Result<Vec<TimingResponseDto>> {
        let masjid_ids: Vec<Uuid> = timings
            .iter()
            .map(|t| t.masjid_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let namaaz_ids: Vec<Uuid> = timings
            .iter()
            .map(|t| t.namaaz_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let masjids: HashMap<Uuid, Masjid> = self
            .masjids
            .find_by_ids(&masjid_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        let namaaz: HashMap<Uuid, Namaaz> = self
            .namaaz
            .find_by_ids(&namaaz_ids)
            .await?
            .into_iter()
            .map(|n| (n.id, n))
            .collect();

        Ok(timings
            .into_iter()
            .map(|timing| {
                let masjid = masjids.get(&timing.masjid_id).cloned();
                let prayer = namaaz.get(&timing.namaaz_id).cloned();
                TimingResponseDto::new(timing, masjid, prayer)
            })
            .collect())
    }
}
