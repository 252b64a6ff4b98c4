use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, MeResponseDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

/// Login with the admin email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let auth_response = service.login(dto)?;
    Ok(Json(ApiResponse::success(Some(auth_response), None, None)))
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<ApiResponse<MeResponseDto>>> {
    let me = service.get_current_user(user);
    Ok(Json(ApiResponse::success(Some(me), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::middleware::auth_middleware;
    use crate::features::auth::routes;
    use crate::features::auth::{JwtValidator, TokenService};
    use crate::shared::test_helpers::{bearer, test_auth_config};
    use axum::http::{header, StatusCode};
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn app() -> Router {
        let config = test_auth_config();
        let token_service = Arc::new(TokenService::new(&config));
        let service = Arc::new(AuthService::new(&config, token_service));
        let validator = Arc::new(JwtValidator::new(&config));

        Router::new()
            .merge(routes::public_routes(Arc::clone(&service)))
            .merge(
                routes::protected_routes(service).route_layer(
                    axum::middleware::from_fn_with_state(validator, auth_middleware),
                ),
            )
    }

    #[tokio::test]
    async fn test_login_then_me() {
        let server = TestServer::new(app()).unwrap();
        let config = test_auth_config();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "admin@pearl.com", "password": config.admin_password }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let token = body["data"]["accessToken"].as_str().unwrap().to_string();

        let me = server
            .get("/api/auth/me")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await;
        me.assert_status_ok();
        let me_body: Value = me.json();
        assert_eq!(me_body["data"]["sub"], "admin@pearl.com");
        assert_eq!(me_body["data"]["roles"][0], "admin");
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let server = TestServer::new(app()).unwrap();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "admin@pearl.com", "password": "admin123" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_login_invalid_email_is_bad_request() {
        let server = TestServer::new(app()).unwrap();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "not-an-email", "password": "x" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_me_requires_token() {
        let server = TestServer::new(app()).unwrap();

        server
            .get("/api/auth/me")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get("/api/auth/me")
            .add_header(header::AUTHORIZATION, bearer("garbage"))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
