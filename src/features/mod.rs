pub mod auth;
pub mod masjids;
pub mod regions;
pub mod users;
