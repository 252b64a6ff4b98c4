pub mod app_config;
pub mod auth;
pub mod feed;
pub mod prompts;
