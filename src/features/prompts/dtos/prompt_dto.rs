use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::prompts::models::{Prompt, PromptCategory};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PROMPT_STYLE, DEFAULT_PROMPT_TITLE};
use crate::shared::types::PaginationQuery;
use crate::shared::validation::{normalize_keywords, validate_http_url, validate_keywords};

// Sort direction
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

// Helper functions for defaults
fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Keywords arrive either as a JSON array or as the comma-separated text
/// typed into the dashboard form.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordsInput {
    List(Vec<String>),
    Text(String),
}

fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<KeywordsInput>::deserialize(deserializer)?;
    Ok(input.map(|keywords| match keywords {
        KeywordsInput::List(list) => normalize_keywords(list),
        KeywordsInput::Text(text) => normalize_keywords([text]),
    }))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// Query params for the admin list
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct PromptQueryParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,

    /// Search in title, style, or keywords (case-insensitive)
    pub search: Option<String>,

    /// Filter by category
    pub category: Option<PromptCategory>,

    /// Filter by style (case-insensitive exact match)
    pub style: Option<String>,

    /// Sort direction (default: desc by createdAt)
    #[serde(default)]
    pub sort: SortDirection,
}

impl PromptQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

// Query params for the public catalog
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CatalogQueryParams {
    /// Only return records of this category
    pub category: Option<PromptCategory>,
}

// Create request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptDto {
    /// Display title, "Untitled" when blank
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: Option<String>,

    /// Full prompt text revealed after unlock
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 10000,
        message = "Prompt is required and must not exceed 10000 characters"
    ))]
    pub prompt: String,

    /// Preview image shown in the feed
    #[serde(default)]
    #[validate(
        length(
            min = 1,
            max = 2048,
            message = "imageUrl is required and must not exceed 2048 characters"
        ),
        url(message = "imageUrl must be a valid URL"),
        custom(function = validate_http_url)
    )]
    pub image_url: String,

    /// Style tag, "General" when blank
    #[validate(length(max = 50, message = "Style must not exceed 50 characters"))]
    pub style: Option<String>,

    /// Array of keywords or comma-separated text
    #[serde(default, deserialize_with = "deserialize_keywords")]
    #[schema(value_type = Option<Vec<String>>)]
    #[validate(custom(function = validate_keywords))]
    pub keywords: Option<Vec<String>>,

    /// Defaults to Men
    pub category: Option<PromptCategory>,
}

impl CreatePromptDto {
    /// Trim text fields and treat blank optional fields as absent
    pub fn normalized(self) -> Self {
        Self {
            title: trimmed(self.title),
            prompt: self.prompt.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            style: trimmed(self.style),
            keywords: self.keywords,
            category: self.category,
        }
    }
}

// Update request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromptDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: Option<String>,

    #[validate(length(
        min = 1,
        max = 10000,
        message = "Prompt must be 1-10000 characters"
    ))]
    pub prompt: Option<String>,

    #[validate(
        length(
            min = 1,
            max = 2048,
            message = "imageUrl must be 1-2048 characters"
        ),
        url(message = "imageUrl must be a valid URL"),
        custom(function = validate_http_url)
    )]
    pub image_url: Option<String>,

    #[validate(length(max = 50, message = "Style must not exceed 50 characters"))]
    pub style: Option<String>,

    #[serde(default, deserialize_with = "deserialize_keywords")]
    #[schema(value_type = Option<Vec<String>>)]
    #[validate(custom(function = validate_keywords))]
    pub keywords: Option<Vec<String>>,

    pub category: Option<PromptCategory>,
}

impl UpdatePromptDto {
    /// Trim text fields. A blank title or style resets it to its default,
    /// a blank prompt or image URL is kept so validation rejects it.
    pub fn normalized(self) -> Self {
        Self {
            title: self
                .title
                .map(|s| trimmed(Some(s)).unwrap_or_else(|| DEFAULT_PROMPT_TITLE.to_string())),
            prompt: self.prompt.map(|s| s.trim().to_string()),
            image_url: self.image_url.map(|s| s.trim().to_string()),
            style: self
                .style
                .map(|s| trimmed(Some(s)).unwrap_or_else(|| DEFAULT_PROMPT_STYLE.to_string())),
            keywords: self.keywords,
            category: self.category,
        }
    }
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponseDto {
    pub id: Uuid,
    pub title: String,
    pub prompt: String,
    pub image_url: String,
    pub style: String,
    pub keywords: Vec<String>,
    pub category: PromptCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponseDto {
    fn from(p: Prompt) -> Self {
        let updated_at = p.last_modified();
        Self {
            id: p.id,
            title: p.title,
            prompt: p.prompt,
            image_url: p.image_url,
            style: p.style,
            keywords: p.keywords,
            category: p.category,
            created_at: p.created_at,
            updated_at,
        }
    }
}

impl From<&Prompt> for PromptResponseDto {
    fn from(p: &Prompt) -> Self {
        Self::from(p.clone())
    }
}
