/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// PROMPT RECORD DEFAULTS
// =============================================================================

/// Title stored when the admin leaves it blank
pub const DEFAULT_PROMPT_TITLE: &str = "Untitled";

/// Style stored when the admin leaves it blank
pub const DEFAULT_PROMPT_STYLE: &str = "General";

/// Maximum number of keywords on a single prompt record
pub const MAX_KEYWORDS: usize = 30;

/// Maximum length of a single keyword
pub const MAX_KEYWORD_LEN: usize = 50;

// =============================================================================
// FEED
// =============================================================================

/// Default look-back window for the new arrivals feed
pub const NEW_ARRIVALS_WINDOW_HOURS: i64 = 24;

/// Longest look-back window accepted for new arrivals (one week)
pub const MAX_NEW_ARRIVALS_WINDOW_HOURS: i64 = 168;

/// Default number of records per new arrivals section
pub const NEW_ARRIVALS_LIMIT: usize = 10;

/// Maximum number of records per new arrivals section
pub const MAX_NEW_ARRIVALS_LIMIT: usize = 50;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can create, edit and delete prompt records
pub const ROLE_ADMIN: &str = "admin";
