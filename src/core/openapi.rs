use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::app_config::{dtos as app_config_dtos, handlers as app_config_handlers};
use crate::features::auth;
use crate::features::feed::{dtos as feed_dtos, handlers as feed_handlers};
use crate::features::prompts::{
    dtos as prompts_dtos, handlers as prompts_handlers, models as prompts_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        // Catalog (public)
        prompts_handlers::list_catalog,
        // Prompts (admin)
        prompts_handlers::create_prompt,
        prompts_handlers::get_prompt,
        prompts_handlers::list_prompts,
        prompts_handlers::update_prompt,
        prompts_handlers::delete_prompt,
        // Feed (public)
        feed_handlers::get_new_arrivals,
        feed_handlers::get_category_feed,
        // App config (public)
        app_config_handlers::get_app_config,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::AuthUserDto,
            auth::dtos::MeResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            // Prompts
            prompts_models::PromptCategory,
            prompts_dtos::SortDirection,
            prompts_dtos::CreatePromptDto,
            prompts_dtos::UpdatePromptDto,
            prompts_dtos::PromptResponseDto,
            ApiResponse<prompts_dtos::PromptResponseDto>,
            ApiResponse<Vec<prompts_dtos::PromptResponseDto>>,
            // Feed
            feed_dtos::NewArrivalsDto,
            ApiResponse<feed_dtos::NewArrivalsDto>,
            // App config
            app_config_dtos::ConfigResponseDto,
        )
    ),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "catalog", description = "Public prompt catalog read by the mobile app"),
        (name = "prompts", description = "Prompt record management (admin only)"),
        (name = "feed", description = "New arrivals and per-category feeds (public)"),
        (name = "config", description = "Mobile app release info (public)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Pearl API",
        version = "0.1.0",
        description = "API documentation for the Pearl AI prompt catalog",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Overrides the generated info block with values from `SWAGGER_*` config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/prompts",
            "/api/admin/prompts",
            "/api/admin/prompts/{id}",
            "/api/feed/new-arrivals",
            "/api/feed/{category}",
            "/api/config",
            "/api/auth/login",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
