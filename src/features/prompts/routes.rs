use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::prompts::{handlers::prompt_handler as handlers, services::PromptService};

/// Create admin routes for prompt management (admin only)
pub fn admin_routes(service: Arc<PromptService>) -> Router {
    Router::new()
        .route(
            "/api/admin/prompts",
            get(handlers::list_prompts).post(handlers::create_prompt),
        )
        .route(
            "/api/admin/prompts/{id}",
            get(handlers::get_prompt)
                .put(handlers::update_prompt)
                .delete(handlers::delete_prompt),
        )
        .with_state(service)
}

/// Public catalog read by the mobile app (no authentication)
pub fn public_routes(service: Arc<PromptService>) -> Router {
    Router::new()
        .route("/api/prompts", get(handlers::list_catalog))
        .with_state(service)
}
