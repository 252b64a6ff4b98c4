//! Release information polled by the mobile app on launch.
//!
//! `GET /api/config?current=<version>` returns the published release and,
//! when the caller reports its installed version, whether it should update.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AppConfigService;
