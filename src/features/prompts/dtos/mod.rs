pub mod prompt_dto;

pub use prompt_dto::{
    CatalogQueryParams, CreatePromptDto, PromptQueryParams, PromptResponseDto, SortDirection,
    UpdatePromptDto,
};
