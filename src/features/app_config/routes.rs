use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::app_config::{handlers, services::AppConfigService};

pub fn routes(service: Arc<AppConfigService>) -> Router {
    Router::new()
        .route("/api/config", get(handlers::get_app_config))
        .with_state(service)
}
