//! Admin authentication.
//!
//! Admin credentials come from configuration. A successful login issues an
//! HS256 access token; protected routes validate it in `auth_middleware`
//! and handlers gate on roles with the guards in [`guards`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/login` | No | Exchange admin credentials for a token |
//! | GET | `/api/auth/me` | Yes | Current authenticated user |

mod validator;

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
pub use validator::JwtValidator;
