use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::storage::JsonStore;
use crate::features::prompts::dtos::{
    CreatePromptDto, PromptQueryParams, PromptResponseDto, SortDirection, UpdatePromptDto,
};
use crate::features::prompts::models::prompt::newest_first;
use crate::features::prompts::models::{Prompt, PromptCategory};
use crate::shared::constants::{DEFAULT_PROMPT_STYLE, DEFAULT_PROMPT_TITLE};

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Prompt with id {} not found", id))
}

/// Catalog CRUD over the JSON document store
pub struct PromptService {
    store: Arc<JsonStore<Prompt>>,
}

impl std::fmt::Debug for PromptService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptService")
            .field("store", &self.store)
            .finish()
    }
}

impl PromptService {
    pub fn new(store: Arc<JsonStore<Prompt>>) -> Self {
        Self { store }
    }

    /// Create a new prompt record, substituting defaults for omitted fields
    pub async fn create(&self, dto: CreatePromptDto) -> Result<PromptResponseDto> {
        let now = Utc::now();
        let prompt = Prompt {
            id: Uuid::now_v7(),
            title: dto
                .title
                .unwrap_or_else(|| DEFAULT_PROMPT_TITLE.to_string()),
            prompt: dto.prompt,
            image_url: dto.image_url,
            style: dto
                .style
                .unwrap_or_else(|| DEFAULT_PROMPT_STYLE.to_string()),
            keywords: dto.keywords.unwrap_or_default(),
            category: dto.category.unwrap_or_default(),
            created_at: now,
            updated_at: Some(now),
        };

        let created = prompt.clone();
        self.store
            .mutate(move |docs| {
                docs.push(prompt);
                Ok::<_, AppError>(())
            })
            .await?;

        tracing::info!(
            "Prompt {} created in {} ({})",
            created.id,
            created.category,
            created.title
        );

        Ok(PromptResponseDto::from(created))
    }

    /// Get prompt by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<PromptResponseDto> {
        self.store
            .read(|docs| docs.iter().find(|p| p.id == id).map(PromptResponseDto::from))
            .await
            .ok_or_else(|| not_found(id))
    }

    /// List prompts with pagination and filters
    pub async fn list(&self, params: &PromptQueryParams) -> Result<(Vec<PromptResponseDto>, i64)> {
        let search = params
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let style = params
            .style
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let pagination = params.pagination();

        let (page, total) = self
            .store
            .read(|docs| {
                let mut matched: Vec<&Prompt> = docs
                    .iter()
                    .filter(|p| params.category.is_none_or(|c| p.category == c))
                    .filter(|p| style.is_none_or(|s| p.style.eq_ignore_ascii_case(s)))
                    .filter(|p| search.as_deref().is_none_or(|s| p.matches_search(s)))
                    .collect();

                matched.sort_by(|a, b| newest_first(a, b));
                if let SortDirection::Asc = params.sort {
                    matched.reverse();
                }

                let total = matched.len() as i64;
                let page: Vec<PromptResponseDto> = matched
                    .into_iter()
                    .skip(pagination.offset())
                    .take(pagination.limit() as usize)
                    .map(PromptResponseDto::from)
                    .collect();

                (page, total)
            })
            .await;

        Ok((page, total))
    }

    /// Full catalog, newest first, as consumed by the mobile app
    pub async fn list_public(
        &self,
        category: Option<PromptCategory>,
    ) -> Result<Vec<PromptResponseDto>> {
        let prompts = self
            .store
            .read(|docs| {
                let mut matched: Vec<&Prompt> = docs
                    .iter()
                    .filter(|p| category.is_none_or(|c| p.category == c))
                    .collect();
                matched.sort_by(|a, b| newest_first(a, b));
                matched
                    .into_iter()
                    .map(PromptResponseDto::from)
                    .collect()
            })
            .await;

        Ok(prompts)
    }

    /// Apply the supplied fields to an existing prompt
    pub async fn update(&self, id: Uuid, dto: UpdatePromptDto) -> Result<PromptResponseDto> {
        let updated = self
            .store
            .mutate(|docs| {
                let prompt = docs
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| not_found(id))?;

                if let Some(title) = dto.title {
                    prompt.title = title;
                }
                if let Some(text) = dto.prompt {
                    prompt.prompt = text;
                }
                if let Some(image_url) = dto.image_url {
                    prompt.image_url = image_url;
                }
                if let Some(style) = dto.style {
                    prompt.style = style;
                }
                if let Some(keywords) = dto.keywords {
                    prompt.keywords = keywords;
                }
                if let Some(category) = dto.category {
                    prompt.category = category;
                }
                prompt.updated_at = Some(Utc::now());

                Ok::<_, AppError>(prompt.clone())
            })
            .await?;

        tracing::info!("Prompt {} updated", id);

        Ok(PromptResponseDto::from(updated))
    }

    /// Delete a prompt permanently
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store
            .mutate(|docs| {
                let index = docs
                    .iter()
                    .position(|p| p.id == id)
                    .ok_or_else(|| not_found(id))?;
                docs.remove(index);
                Ok::<_, AppError>(())
            })
            .await?;

        tracing::info!("Prompt {} deleted", id);

        Ok(())
    }
}
