use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ConfigQueryParams {
    /// Version installed on the calling device, e.g. `2.1.0`
    pub current: Option<String>,
}

/// Release info in the shape the mobile app reads on launch
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponseDto {
    pub latest_version: String,
    pub min_required_version: String,
    pub update_url: String,
    pub message: String,
    pub force_update: bool,

    /// Present only when `current` was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_available: Option<bool>,

    /// Present only when `current` was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_required: Option<bool>,
}
