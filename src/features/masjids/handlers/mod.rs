mod masjid_handler;
mod namaaz_handler;

pub use masjid_handler::*;
pub use namaaz_handler::*;
