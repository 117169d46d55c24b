//! Geographic hierarchy: countries, states and cities.
//!
//! Each state references a country and each city references a state. Parents
//! are checked on create and update only; deleting a parent leaves its children
//! pointing at nothing, and those references expand to `null` in responses.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/countries` | List all countries |
//! | GET | `/api/countries/{id}` | Get country by id |
//! | POST | `/api/admin/countries` | Create a country |
//! | PUT | `/api/admin/countries/{id}` | Update a country |
//! | DELETE | `/api/admin/countries/{id}` | Delete a country |
//!
//! States (`/api/states`, `/api/admin/states`) and cities (`/api/cities`,
//! `/api/admin/cities`) follow the same layout.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::RegionService;
