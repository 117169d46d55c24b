mod auth_service;
pub mod password_service;
mod token_service;

pub use auth_service::AuthService;
pub use token_service::TokenService;
