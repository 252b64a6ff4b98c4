use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::prompts::dtos::{
    CatalogQueryParams, CreatePromptDto, PromptQueryParams, PromptResponseDto, UpdatePromptDto,
};
use crate::features::prompts::services::PromptService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a new prompt record (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/prompts",
    request_body = CreatePromptDto,
    responses(
        (status = 201, description = "Prompt created successfully", body = ApiResponse<PromptResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_prompt(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<PromptService>>,
    AppJson(dto): AppJson<CreatePromptDto>,
) -> Result<(StatusCode, Json<ApiResponse<PromptResponseDto>>)> {
    let dto = dto.normalized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("Prompt create requested by {}", user.sub);
    let prompt = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(prompt), None, None)),
    ))
}

/// Get a prompt by ID (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt retrieved successfully", body = ApiResponse<PromptResponseDto>),
        (status = 404, description = "Prompt not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_prompt(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PromptService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PromptResponseDto>>> {
    let prompt = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// List prompts with search, filters and pagination (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/prompts",
    params(PromptQueryParams),
    responses(
        (status = 200, description = "Prompts retrieved successfully", body = ApiResponse<Vec<PromptResponseDto>>),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_prompts(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PromptService>>,
    Query(params): Query<PromptQueryParams>,
) -> Result<Json<ApiResponse<Vec<PromptResponseDto>>>> {
    let (prompts, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(prompts),
        None,
        Some(Meta { total }),
    )))
}

/// Update a prompt (admin only)
#[utoipa::path(
    put,
    path = "/api/admin/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptDto,
    responses(
        (status = 200, description = "Prompt updated successfully", body = ApiResponse<PromptResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Prompt not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_prompt(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PromptService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdatePromptDto>,
) -> Result<Json<ApiResponse<PromptResponseDto>>> {
    let dto = dto.normalized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let prompt = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// Delete a prompt (admin only)
#[utoipa::path(
    delete,
    path = "/api/admin/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt deleted successfully"),
        (status = 404, description = "Prompt not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "prompts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_prompt(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PromptService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

/// Public catalog, newest first
///
/// Returns a bare JSON array (no envelope): installed mobile builds parse
/// the response body directly as a list of prompts.
#[utoipa::path(
    get,
    path = "/api/prompts",
    params(CatalogQueryParams),
    responses(
        (status = 200, description = "Prompt catalog", body = Vec<PromptResponseDto>),
    ),
    tag = "catalog"
)]
pub async fn list_catalog(
    State(service): State<Arc<PromptService>>,
    Query(params): Query<CatalogQueryParams>,
) -> Result<Json<Vec<PromptResponseDto>>> {
    let prompts = service.list_public(params.category).await?;
    Ok(Json(prompts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::JsonStore;
    use crate::features::auth::model::AuthenticatedUser;
    use crate::features::prompts::routes;
    use crate::shared::test_helpers::{with_admin_auth, with_user};
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn app(dir: &tempfile::TempDir) -> Router {
        let store = JsonStore::open(dir.path().join("prompts.json"))
            .await
            .unwrap();
        let service = Arc::new(PromptService::new(Arc::new(store)));

        Router::new()
            .merge(with_admin_auth(routes::admin_routes(Arc::clone(&service))))
            .merge(routes::public_routes(service))
    }

    #[tokio::test]
    async fn test_create_then_read_back_publicly() {
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(app(&dir).await).unwrap();

        let response = server
            .post("/api/admin/prompts")
            .json(&json!({
                "title": "Golden Hour Portrait",
                "prompt": "portrait of a man at golden hour, 85mm, bokeh",
                "imageUrl": "https://cdn.example.com/golden.png",
                "style": "Cinematic",
                "keywords": "portrait, golden hour",
                "category": "Men"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["keywords"], json!(["portrait", "golden hour"]));

        let catalog: Value = server.get("/api/prompts").await.json();
        let items = catalog.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Golden Hour Portrait");
        assert_eq!(items[0]["imageUrl"], "https://cdn.example.com/golden.png");
    }

    #[tokio::test]
    async fn test_create_missing_fields_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(app(&dir).await).unwrap();

        let response = server
            .post("/api/admin/prompts")
            .json(&json!({ "title": "No image" , "prompt": "something" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_update_and_delete_flow() {
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(app(&dir).await).unwrap();

        let created: Value = server
            .post("/api/admin/prompts")
            .json(&json!({
                "prompt": "a cozy cabin in snow",
                "imageUrl": "https://cdn.example.com/cabin.png"
            }))
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["data"]["title"], "Untitled");

        let updated = server
            .put(&format!("/api/admin/prompts/{}", id))
            .json(&json!({ "title": "Snow Cabin", "category": "Product" }))
            .await;
        updated.assert_status_ok();
        let updated_body: Value = updated.json();
        assert_eq!(updated_body["data"]["title"], "Snow Cabin");
        assert_eq!(updated_body["data"]["category"], "Product");

        server
            .delete(&format!("/api/admin/prompts/{}", id))
            .await
            .assert_status_ok();

        server
            .get(&format!("/api/admin/prompts/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_list_reports_total() {
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(app(&dir).await).unwrap();

        for (title, category) in [("One", "Men"), ("Two", "Women"), ("Three", "Women")] {
            server
                .post("/api/admin/prompts")
                .json(&json!({
                    "title": title,
                    "prompt": "prompt text",
                    "imageUrl": "https://cdn.example.com/x.png",
                    "category": category
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let body: Value = server
            .get("/api/admin/prompts?category=Women&page_size=1")
            .await
            .json();

        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["title"], "Three");
    }

    #[tokio::test]
    async fn test_admin_routes_reject_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("prompts.json"))
            .await
            .unwrap();
        let service = Arc::new(PromptService::new(Arc::new(store)));
        let server = TestServer::new(routes::admin_routes(service)).unwrap();

        server
            .post("/api/admin/prompts")
            .json(&json!({
                "prompt": "x",
                "imageUrl": "https://cdn.example.com/x.png"
            }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_routes_forbid_non_admin() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("prompts.json"))
            .await
            .unwrap();
        let service = Arc::new(PromptService::new(Arc::new(store)));
        let viewer = AuthenticatedUser {
            sub: "viewer@pearl.com".to_string(),
            roles: vec!["viewer".to_string()],
        };
        let server = TestServer::new(with_user(routes::admin_routes(service), viewer)).unwrap();

        let response = server.get("/api/admin/prompts").await;

        response.assert_status(StatusCode::FORBIDDEN);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_catalog_category_filter_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(app(&dir).await).unwrap();

        for category in ["Men", "Women"] {
            server
                .post("/api/admin/prompts")
                .json(&json!({
                    "title": category,
                    "prompt": "prompt text",
                    "imageUrl": "https://cdn.example.com/x.png",
                    "category": category
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let catalog: Value = server.get("/api/prompts?category=women").await.json();
        let items = catalog.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["category"], "Women");

        let admin: Value = server.get("/api/admin/prompts?category=MEN").await.json();
        assert_eq!(admin["meta"]["total"], 1);
    }
}
