//! Prompt record catalog.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/prompts` | No | Full catalog as a bare array, newest first |
//! | GET | `/api/admin/prompts` | Admin | Search, filter and paginate |
//! | POST | `/api/admin/prompts` | Admin | Create a prompt record |
//! | GET | `/api/admin/prompts/{id}` | Admin | Get one record |
//! | PUT | `/api/admin/prompts/{id}` | Admin | Partial update |
//! | DELETE | `/api/admin/prompts/{id}` | Admin | Delete a record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PromptService;
