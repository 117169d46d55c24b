//! Accounts and their masjid assignments.
//!
//! Sign-up, login and password changes are served by the auth feature; this
//! feature owns the user store and the admin endpoint that attaches masjids to
//! an account.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::UserService;
