use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::feed::dtos::{CategoryFeedQuery, NewArrivalsDto, NewArrivalsQuery};
use crate::features::feed::services::FeedService;
use crate::features::prompts::dtos::PromptResponseDto;
use crate::features::prompts::models::PromptCategory;
use crate::shared::types::{ApiResponse, Meta};

/// Records added recently, split into Men and Women sections
#[utoipa::path(
    get,
    path = "/api/feed/new-arrivals",
    params(NewArrivalsQuery),
    responses(
        (status = 200, description = "New arrivals", body = ApiResponse<NewArrivalsDto>),
    ),
    tag = "feed"
)]
pub async fn get_new_arrivals(
    State(service): State<Arc<FeedService>>,
    Query(query): Query<NewArrivalsQuery>,
) -> Result<Json<ApiResponse<NewArrivalsDto>>> {
    let arrivals = service.new_arrivals(&query).await?;
    Ok(Json(ApiResponse::success(Some(arrivals), None, None)))
}

/// One category, newest first
#[utoipa::path(
    get,
    path = "/api/feed/{category}",
    params(
        ("category" = String, Path, description = "Men, Women or Product (case-insensitive)"),
        CategoryFeedQuery
    ),
    responses(
        (status = 200, description = "Category feed page", body = ApiResponse<Vec<PromptResponseDto>>),
        (status = 400, description = "Unknown category"),
    ),
    tag = "feed"
)]
pub async fn get_category_feed(
    State(service): State<Arc<FeedService>>,
    Path(category): Path<String>,
    Query(query): Query<CategoryFeedQuery>,
) -> Result<Json<ApiResponse<Vec<PromptResponseDto>>>> {
    let category: PromptCategory = category.parse().map_err(AppError::BadRequest)?;

    let (items, total) = service.category_feed(category, &query).await?;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::JsonStore;
    use crate::features::feed::routes;
    use crate::features::prompts::models::Prompt;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    async fn server(dir: &tempfile::TempDir) -> TestServer {
        let store = JsonStore::open(dir.path().join("prompts.json"))
            .await
            .unwrap();
        store
            .mutate(|docs| {
                for (title, category) in [
                    ("Street style", PromptCategory::Men),
                    ("Saree portrait", PromptCategory::Women),
                    ("Watch closeup", PromptCategory::Product),
                ] {
                    docs.push(Prompt {
                        id: Uuid::now_v7(),
                        title: title.to_string(),
                        prompt: "prompt".to_string(),
                        image_url: "https://cdn.example.com/p.png".to_string(),
                        style: "General".to_string(),
                        keywords: Vec::new(),
                        category,
                        created_at: Utc::now(),
                        updated_at: None,
                    });
                }
                Ok::<_, AppError>(())
            })
            .await
            .unwrap();

        let service = Arc::new(FeedService::new(Arc::new(store)));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_new_arrivals_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(&dir).await;

        let response = server.get("/api/feed/new-arrivals").await;
        response.assert_status_ok();
        let body: Value = response.json();

        assert_eq!(body["data"]["men"][0]["title"], "Street style");
        assert_eq!(body["data"]["women"][0]["title"], "Saree portrait");
        assert!(body["data"].get("product").is_none());
    }

    #[tokio::test]
    async fn test_category_feed_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(&dir).await;

        let body: Value = server.get("/api/feed/product").await.json();

        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["title"], "Watch closeup");
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let server = server(&dir).await;

        server
            .get("/api/feed/kids")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
