use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::DEFAULT_PROMPT_STYLE;

/// Audience section a prompt record is listed under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum PromptCategory {
    #[default]
    Men,
    Women,
    Product,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 3] = [
        PromptCategory::Men,
        PromptCategory::Women,
        PromptCategory::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptCategory::Men => "Men",
            PromptCategory::Women => "Women",
            PromptCategory::Product => "Product",
        }
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptCategory {
    type Err = String;

    /// Case-insensitive, so `/api/feed/women` and `/api/feed/Women` both resolve
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}', expected one of: Men, Women, Product",
                    s
                )
            })
    }
}

// Bodies, query strings and stored documents all accept any casing
impl<'de> Deserialize<'de> for PromptCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Stored prompt record.
///
/// Records written before categories, styles or edit tracking existed load
/// with `Men`, `General` and `updated_at = None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: Uuid,
    pub title: String,
    pub prompt: String,
    pub image_url: String,
    #[serde(default = "default_style", deserialize_with = "style_or_default")]
    pub style: String,
    #[serde(default, deserialize_with = "keywords_or_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "category_or_default")]
    pub category: PromptCategory,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_style() -> String {
    DEFAULT_PROMPT_STYLE.to_string()
}

fn style_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default_style))
}

fn keywords_or_default<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn category_or_default<'de, D>(deserializer: D) -> Result<PromptCategory, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PromptCategory>::deserialize(deserializer)?.unwrap_or_default())
}

impl Prompt {
    /// Dashboard search: `needle` must already be lowercase
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.style.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }

    /// Feed search only looks at titles: `needle` must already be lowercase
    pub fn title_matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Newest first; UUID v7 ids break ties in creation order
pub fn newest_first(a: &Prompt, b: &Prompt) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_document_defaults() {
        let doc = json!({
            "id": "0190f5c2-7a1e-7cc3-8d1a-4a3b2c1d0e0f",
            "title": "Rainy street",
            "prompt": "a rainy neon street at night",
            "imageUrl": "https://cdn.example.com/rain.png",
            "style": null,
            "keywords": null,
            "category": null,
            "createdAt": "2025-01-01T10:00:00Z"
        });

        let prompt: Prompt = serde_json::from_value(doc).unwrap();

        assert_eq!(prompt.category, PromptCategory::Men);
        assert_eq!(prompt.style, "General");
        assert!(prompt.keywords.is_empty());
        assert_eq!(prompt.last_modified(), prompt.created_at);
    }

    #[test]
    fn test_serializes_camel_case() {
        let doc = json!({
            "id": "0190f5c2-7a1e-7cc3-8d1a-4a3b2c1d0e0f",
            "title": "Studio bottle",
            "prompt": "a perfume bottle on marble",
            "imageUrl": "https://cdn.example.com/bottle.png",
            "style": "Realistic",
            "keywords": ["perfume"],
            "category": "Product",
            "createdAt": "2025-01-01T10:00:00Z",
            "updatedAt": "2025-01-02T10:00:00Z"
        });

        let prompt: Prompt = serde_json::from_value(doc).unwrap();
        let value = serde_json::to_value(&prompt).unwrap();

        assert_eq!(value["imageUrl"], "https://cdn.example.com/bottle.png");
        assert_eq!(value["category"], "Product");
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("women".parse::<PromptCategory>(), Ok(PromptCategory::Women));
        assert_eq!(" PRODUCT ".parse::<PromptCategory>(), Ok(PromptCategory::Product));
        assert!("kids".parse::<PromptCategory>().is_err());
    }

    #[test]
    fn test_category_deserializes_any_case() {
        let category: PromptCategory = serde_json::from_value(json!("women")).unwrap();
        assert_eq!(category, PromptCategory::Women);
        assert!(serde_json::from_value::<PromptCategory>(json!("Kids")).is_err());
    }

    #[test]
    fn test_matches_search() {
        let prompt = Prompt {
            id: Uuid::now_v7(),
            title: "Desert Warrior".to_string(),
            prompt: "full prompt".to_string(),
            image_url: "https://cdn.example.com/w.png".to_string(),
            style: "Cinematic".to_string(),
            keywords: vec!["Dune".to_string(), "sand".to_string()],
            category: PromptCategory::Men,
            created_at: Utc::now(),
            updated_at: None,
        };

        assert!(prompt.matches_search("warrior"));
        assert!(prompt.matches_search("cinema"));
        assert!(prompt.matches_search("dune"));
        assert!(!prompt.matches_search("forest"));

        assert!(prompt.title_matches("desert"));
        assert!(!prompt.title_matches("cinematic"));
    }
}
