use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::feed::{handlers, services::FeedService};

/// Public feed routes read by the mobile app
pub fn routes(service: Arc<FeedService>) -> Router {
    Router::new()
        .route("/api/feed/new-arrivals", get(handlers::get_new_arrivals))
        .route("/api/feed/{category}", get(handlers::get_category_feed))
        .with_state(service)
}
