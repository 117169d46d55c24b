mod masjid_service;
mod namaaz_service;

pub use masjid_service::{MasjidService, MasjidStore};
pub use namaaz_service::NamaazService;
