use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::app_config::dtos::{ConfigQueryParams, ConfigResponseDto};
use crate::features::app_config::services::AppConfigService;

/// Current app release and update policy
///
/// Returned without the usual envelope: the mobile app reads these fields
/// at the top level.
#[utoipa::path(
    get,
    path = "/api/config",
    params(ConfigQueryParams),
    responses(
        (status = 200, description = "Release info", body = ConfigResponseDto),
        (status = 400, description = "Unparseable current version"),
    ),
    tag = "config"
)]
pub async fn get_app_config(
    State(service): State<Arc<AppConfigService>>,
    Query(params): Query<ConfigQueryParams>,
) -> Result<Json<ConfigResponseDto>> {
    let config = service.get_config(params.current.as_deref())?;
    Ok(Json(config))
}
