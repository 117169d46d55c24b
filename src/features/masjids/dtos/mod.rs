mod chart_upload;
mod masjid_dto;

pub use chart_upload::*;
pub use masjid_dto::*;
