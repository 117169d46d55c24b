mod city_repository;
mod country_repository;
mod state_repository;

pub use city_repository::PgCityRepository;
pub use country_repository::PgCountryRepository;
pub use state_repository::PgStateRepository;
