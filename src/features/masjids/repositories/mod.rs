mod masjid_repository;
mod namaaz_repository;
mod timing_repository;

pub use masjid_repository::{MasjidRepository, PgMasjidRepository};
pub use namaaz_repository::PgNamaazRepository;
pub use timing_repository::PgTimingRepository;
