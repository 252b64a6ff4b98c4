use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::MAX_PAGE_SIZE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page/page size pair resolved from a list query
#[derive(Debug, Clone)]
pub struct PaginationQuery {
    /// Page number (1-indexed)
    pub page: i64,

    /// Requested items per page, clamped by [`PaginationQuery::limit`]
    pub page_size: i64,
}

impl PaginationQuery {
    /// Number of items to skip for the requested page
    pub fn offset(&self) -> usize {
        let skipped = self
            .page
            .max(1)
            .saturating_sub(1)
            .saturating_mul(self.limit());
        usize::try_from(skipped).unwrap_or(usize::MAX)
    }

    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}
