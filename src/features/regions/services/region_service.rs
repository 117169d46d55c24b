use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::{
    CityPayload, CityResponseDto, CountryPayload, CountryResponseDto, StatePayload,
    StateResponseDto,
};
use crate::features::regions::models::{
    City, CityInput, Country, CountryInput, State, StateInput,
};
use crate::shared::repository::NamedRepository;
use crate::shared::types::RecordId;

pub type CountryStore = Arc<dyn NamedRepository<Country, CountryInput>>;
pub type StateStore = Arc<dyn NamedRepository<State, StateInput>>;
pub type CityStore = Arc<dyn NamedRepository<City, CityInput>>;

/// Service for the country → state → city hierarchy
pub struct RegionService {
    countries: CountryStore,
    states: StateStore,
    cities: CityStore,
}

/// Path ids that are not well-formed cannot name a stored record
fn record_id(raw: &str) -> Option<Uuid> {
    RecordId::parse(raw).map(RecordId::uuid)
}

fn unique_ids(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    ids.into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}

impl RegionService {
    pub fn new(countries: CountryStore, states: StateStore, cities: CityStore) -> Self {
        Self {
            countries,
            states,
            cities,
        }
    }

    // ==================== Countries ====================

    pub async fn list_countries(&self) -> Result<Vec<CountryResponseDto>> {
        let countries = self.countries.find_all().await?;
        Ok(countries.into_iter().map(Into::into).collect())
    }

    pub async fn get_country(&self, id: &str) -> Result<CountryResponseDto> {
        self.find_country(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("country is not found".to_string()))
    }

    pub async fn create_country(&self, payload: CountryPayload) -> Result<CountryResponseDto> {
        let input = payload.validate(None)?;

        if self.countries.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "{} country is already present",
                input.name
            )));
        }

        let country = self.countries.insert(input).await?;
        tracing::info!("Country created: id={}, name={}", country.id, country.name);

        Ok(country.into())
    }

    pub async fn update_country(
        &self,
        id: &str,
        payload: CountryPayload,
    ) -> Result<CountryResponseDto> {
        let input = payload.validate(Some(id))?;
        let not_found = || AppError::NotFound("country is not found!".to_string());

        let existing = self.find_country(id).await?.ok_or_else(not_found)?;

        let country = self
            .countries
            .update(existing.id, input)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Country updated: id={}", country.id);

        Ok(country.into())
    }

    pub async fn delete_country(&self, id: &str) -> Result<()> {
        if let Some(id) = record_id(id) {
            self.countries.delete(id).await?;
            tracing::info!("Country deleted: id={}", id);
        }
        Ok(())
    }

    async fn find_country(&self, id: &str) -> Result<Option<Country>> {
        match record_id(id) {
            Some(id) => self.countries.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn require_country(&self, id: Uuid) -> Result<Country> {
        self.countries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("country is not found".to_string()))
    }

    // ==================== States ====================

    pub async fn list_states(&self) -> Result<Vec<StateResponseDto>> {
        let states = self.states.find_all().await?;
        self.expand_states(states).await
    }

    pub async fn get_state(&self, id: &str) -> Result<StateResponseDto> {
        let state = self
            .find_state(id)
            .await?
            .ok_or_else(|| AppError::NotFound("state is not found".to_string()))?;
        let country = self.countries.find_by_id(state.country_id).await?;
        Ok(StateResponseDto::new(state, country))
    }

    pub async fn create_state(&self, payload: StatePayload) -> Result<StateResponseDto> {
        let input = payload.validate(None)?;

        if self.states.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "{} state is already present",
                input.name
            )));
        }
        let country = self.require_country(input.country_id).await?;

        let state = self.states.insert(input).await?;
        tracing::info!(
            "State created: id={}, name={}, country_id={}",
            state.id,
            state.name,
            state.country_id
        );

        Ok(StateResponseDto::new(state, Some(country)))
    }

    pub async fn update_state(&self, id: &str, payload: StatePayload) -> Result<StateResponseDto> {
        let input = payload.validate(Some(id))?;
        let not_found = || AppError::NotFound("state is not found!".to_string());

        let existing = self.find_state(id).await?.ok_or_else(not_found)?;
        let country = self.require_country(input.country_id).await?;

        let state = self
            .states
            .update(existing.id, input)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("State updated: id={}", state.id);

        Ok(StateResponseDto::new(state, Some(country)))
    }

    pub async fn delete_state(&self, id: &str) -> Result<()> {
        if let Some(id) = record_id(id) {
            self.states.delete(id).await?;
            tracing::info!("State deleted: id={}", id);
        }
        Ok(())
    }

    async fn find_state(&self, id: &str) -> Result<Option<State>> {
        match record_id(id) {
            Some(id) => self.states.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Expand each state's country with one batched lookup
    async fn expand_states(&self, states: Vec<State>) -> Result<Vec<StateResponseDto>> {
        let country_ids = unique_ids(states.iter().map(|s| s.country_id));
        let countries: HashMap<Uuid, Country> = self
            .countries
            .find_by_ids(&country_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(states
            .into_iter()
            .map(|state| {
                let country = countries.get(&state.country_id).cloned();
                StateResponseDto::new(state, country)
            })
            .collect())
    }

    // ==================== Cities ====================

    pub async fn list_cities(&self) -> Result<Vec<CityResponseDto>> {
        let cities = self.cities.find_all().await?;
        self.expand_cities(cities).await
    }

    pub async fn get_city(&self, id: &str) -> Result<CityResponseDto> {
        let city = self
            .find_city(id)
            .await?
            .ok_or_else(|| AppError::NotFound("city is not found".to_string()))?;
        let mut expanded = self.expand_cities(vec![city]).await?;
        expanded
            .pop()
            .ok_or_else(|| AppError::NotFound("city is not found".to_string()))
    }

    pub async fn create_city(&self, payload: CityPayload) -> Result<CityResponseDto> {
        let input = payload.validate(None)?;

        if self.cities.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "{} city is already present",
                input.name
            )));
        }
        let state = self.require_state(input.state_id).await?;

        let city = self.cities.insert(input).await?;
        tracing::info!(
            "City created: id={}, name={}, state_id={}",
            city.id,
            city.name,
            city.state_id
        );

        let state = self.expand_states(vec![state]).await?.pop();
        Ok(CityResponseDto::new(city, state))
    }

    pub async fn update_city(&self, id: &str, payload: CityPayload) -> Result<CityResponseDto> {
        let input = payload.validate(Some(id))?;
        let not_found = || AppError::NotFound("city is not found!".to_string());

        let existing = self.find_city(id).await?.ok_or_else(not_found)?;
        let state = self.require_state(input.state_id).await?;

        let city = self
            .cities
            .update(existing.id, input)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("City updated: id={}", city.id);

        let state = self.expand_states(vec![state]).await?.pop();
        Ok(CityResponseDto::new(city, state))
    }

    pub async fn delete_city(&self, id: &str) -> Result<()> {
        if let Some(id) = record_id(id) {
            self.cities.delete(id).await?;
            tracing::info!("City deleted: id={}", id);
        }
        Ok(())
    }

    async fn find_city(&self, id: &str) -> Result<Option<City>> {
        match record_id(id) {
            Some(id) => self.cities.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn require_state(&self, id: Uuid) -> Result<State> {
        self.states
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("state is not found".to_string()))
    }

    /// Expand state and country for each city, two batched lookups deep
    async fn expand_cities(&self, cities: Vec<City>) -> Result<Vec<CityResponseDto>> {
        let state_ids = unique_ids(cities.iter().map(|c| c.state_id));
        let states = self.states.find_by_ids(&state_ids).await?;
        let states: HashMap<Uuid, StateResponseDto> = self
            .expand_states(states)
            .await?
            .into_iter()
            .map(|s| (s.id.uuid(), s))
            .collect();

        Ok(cities
            .into_iter()
            .map(|city| {
                let state = states.get(&city.state_id).cloned();
                CityResponseDto::new(city, state)
            })
            .collect())
    }
}
