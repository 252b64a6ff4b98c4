use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::prompts::dtos::PromptResponseDto;
use crate::shared::constants::{
    DEFAULT_PAGE_SIZE, MAX_NEW_ARRIVALS_LIMIT, MAX_NEW_ARRIVALS_WINDOW_HOURS, MAX_PAGE_SIZE,
    NEW_ARRIVALS_LIMIT, NEW_ARRIVALS_WINDOW_HOURS,
};

fn default_window_hours() -> i64 {
    NEW_ARRIVALS_WINDOW_HOURS
}

fn default_new_arrivals_limit() -> usize {
    NEW_ARRIVALS_LIMIT
}

fn default_feed_limit() -> usize {
    DEFAULT_PAGE_SIZE as usize
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct NewArrivalsQuery {
    /// Look-back window in hours (default: 24, max: 168)
    #[serde(default = "default_window_hours")]
    #[param(minimum = 1, maximum = 168)]
    pub window_hours: i64,

    /// Records per section (default: 10, max: 50)
    #[serde(default = "default_new_arrivals_limit")]
    #[param(minimum = 1, maximum = 50)]
    pub limit: usize,
}

impl Default for NewArrivalsQuery {
    fn default() -> Self {
        Self {
            window_hours: NEW_ARRIVALS_WINDOW_HOURS,
            limit: NEW_ARRIVALS_LIMIT,
        }
    }
}

impl NewArrivalsQuery {
    pub fn window_hours(&self) -> i64 {
        self.window_hours.clamp(1, MAX_NEW_ARRIVALS_WINDOW_HOURS)
    }

    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_NEW_ARRIVALS_LIMIT)
    }
}

/// Query for one category feed. `offset` is the number of records the
/// client already shows, so "load more" passes the current list length.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CategoryFeedQuery {
    /// Case-insensitive title search
    pub search: Option<String>,

    /// Records to skip (default: 0)
    #[serde(default)]
    pub offset: usize,

    /// Records to return (default: 10, max: 100)
    #[serde(default = "default_feed_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: usize,
}

impl Default for CategoryFeedQuery {
    fn default() -> Self {
        Self {
            search: None,
            offset: 0,
            limit: default_feed_limit(),
        }
    }
}

impl CategoryFeedQuery {
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_PAGE_SIZE as usize)
    }

    /// Lowercased, trimmed search needle; `None` when blank
    pub fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewArrivalsDto {
    pub men: Vec<PromptResponseDto>,
    pub women: Vec<PromptResponseDto>,
}
