//! Authentication and authorization.
//!
//! Accounts sign up and log in with email and password; login hands out an
//! HS256 JWT. The auth middleware validates it and stores an
//! `AuthenticatedUser` in the request extensions; handlers pick it up directly
//! or through `RequireAdmin`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/auth/signup` | Create an account |
//! | POST | `/api/auth/login` | Exchange credentials for a token |
//! | GET | `/api/auth/me` | Current account |
//! | PATCH | `/api/auth/password` | Change own password |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
