//! Masjids, namaaz (prayer names) and the timings linking the two.
//!
//! A masjid belongs to a city and may carry a prayer timing chart image,
//! uploaded through `POST /api/admin/masjids/{id}/timing-chart` and
//! stored in object storage. A timing references one masjid and one namaaz.
//!
//! Reads live under `/api/masjids`, `/api/namaaz` and
//! `/api/masjid-namaaz-timings`; writes under the matching `/api/admin/...`
//! paths.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::{MasjidService, NamaazService};
