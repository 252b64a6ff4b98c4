//! Mobile feed queries over the prompt catalog.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/feed/new-arrivals` | Recent Men and Women records |
//! | GET | `/api/feed/{category}` | One category with title search and "load more" paging |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::FeedService;
