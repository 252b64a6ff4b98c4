use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::storage::JsonStore;
use crate::features::feed::dtos::{CategoryFeedQuery, NewArrivalsDto, NewArrivalsQuery};
use crate::features::prompts::dtos::PromptResponseDto;
use crate::features::prompts::models::prompt::newest_first;
use crate::features::prompts::models::{Prompt, PromptCategory};

/// Read-only feed views over the prompt catalog
pub struct FeedService {
    store: Arc<JsonStore<Prompt>>,
}

impl FeedService {
    pub fn new(store: Arc<JsonStore<Prompt>>) -> Self {
        Self { store }
    }

    /// Records created inside the window, split into Men and Women sections
    pub async fn new_arrivals(&self, query: &NewArrivalsQuery) -> Result<NewArrivalsDto> {
        let cutoff = Utc::now() - Duration::hours(query.window_hours());
        let limit = query.limit();

        let dto = self
            .store
            .read(|docs| {
                let mut recent: Vec<&Prompt> =
                    docs.iter().filter(|p| p.created_at >= cutoff).collect();
                recent.sort_by(|a, b| newest_first(a, b));

                let section = |category: PromptCategory| -> Vec<PromptResponseDto> {
                    recent
                        .iter()
                        .filter(|p| p.category == category)
                        .take(limit)
                        .map(|p| PromptResponseDto::from(*p))
                        .collect()
                };

                NewArrivalsDto {
                    men: section(PromptCategory::Men),
                    women: section(PromptCategory::Women),
                }
            })
            .await;

        tracing::debug!(
            "New arrivals since {}: {} men, {} women",
            cutoff,
            dto.men.len(),
            dto.women.len()
        );

        Ok(dto)
    }

    /// One category, newest first, with title search and offset paging
    pub async fn category_feed(
        &self,
        category: PromptCategory,
        query: &CategoryFeedQuery,
    ) -> Result<(Vec<PromptResponseDto>, i64)> {
        let needle = query.needle();

        let result = self
            .store
            .read(|docs| {
                let mut matched: Vec<&Prompt> = docs
                    .iter()
                    .filter(|p| p.category == category)
                    .filter(|p| needle.as_deref().is_none_or(|n| p.title_matches(n)))
                    .collect();
                matched.sort_by(|a, b| newest_first(a, b));

                let total = matched.len() as i64;
                let page = matched
                    .into_iter()
                    .skip(query.offset)
                    .take(query.limit())
                    .map(PromptResponseDto::from)
                    .collect();

                (page, total)
            })
            .await;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use chrono::DateTime;
    use uuid::Uuid;

    fn prompt(title: &str, category: PromptCategory, created_at: DateTime<Utc>) -> Prompt {
        Prompt {
            id: Uuid::now_v7(),
            title: title.to_string(),
            prompt: format!("{} prompt", title),
            image_url: "https://cdn.example.com/p.png".to_string(),
            style: "General".to_string(),
            keywords: Vec::new(),
            category,
            created_at,
            updated_at: None,
        }
    }

    async fn seeded(dir: &tempfile::TempDir, prompts: Vec<Prompt>) -> FeedService {
        let store = JsonStore::open(dir.path().join("prompts.json"))
            .await
            .unwrap();
        store
            .mutate(|docs| {
                docs.extend(prompts);
                Ok::<_, AppError>(())
            })
            .await
            .unwrap();
        FeedService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_new_arrivals_window_and_sections() {
        let dir = tempfile::tempdir().unwrap();
        let now = Utc::now();
        let service = seeded(
            &dir,
            vec![
                prompt("Old man", PromptCategory::Men, now - Duration::hours(30)),
                prompt("Fresh man", PromptCategory::Men, now - Duration::hours(2)),
                prompt("Newer man", PromptCategory::Men, now - Duration::hours(1)),
                prompt("Fresh woman", PromptCategory::Women, now - Duration::hours(5)),
                prompt("Fresh bottle", PromptCategory::Product, now - Duration::hours(1)),
            ],
        )
        .await;

        let arrivals = service
            .new_arrivals(&NewArrivalsQuery::default())
            .await
            .unwrap();

        let men: Vec<&str> = arrivals.men.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(men, vec!["Newer man", "Fresh man"]);
        assert_eq!(arrivals.women.len(), 1);
        assert_eq!(arrivals.women[0].title, "Fresh woman");

        let wider = service
            .new_arrivals(&NewArrivalsQuery {
                window_hours: 48,
                limit: 1,
            })
            .await
            .unwrap();
        assert_eq!(wider.men.len(), 1);
        assert_eq!(wider.men[0].title, "Newer man");
    }

    #[tokio::test]
    async fn test_category_feed_search_and_load_more() {
        let dir = tempfile::tempdir().unwrap();
        let now = Utc::now();
        let prompts = (0..5)
            .map(|i| {
                prompt(
                    &format!("Neon look {}", i),
                    PromptCategory::Women,
                    now - Duration::minutes(i),
                )
            })
            .chain([
                prompt("Garden", PromptCategory::Women, now),
                prompt("Neon suit", PromptCategory::Men, now),
            ])
            .collect();
        let service = seeded(&dir, prompts).await;

        let first = CategoryFeedQuery {
            search: Some("NEON".to_string()),
            offset: 0,
            limit: 3,
        };
        let (page, total) = service
            .category_feed(PromptCategory::Women, &first)
            .await
            .unwrap();
        assert_eq!(total, 5);
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].title, "Neon look 0");

        let more = CategoryFeedQuery { offset: 3, ..first };
        let (rest, _) = service
            .category_feed(PromptCategory::Women, &more)
            .await
            .unwrap();
        let titles: Vec<&str> = rest.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Neon look 3", "Neon look 4"]);
    }
}
