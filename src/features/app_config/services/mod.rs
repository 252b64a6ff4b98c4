pub mod app_config_service;

pub use app_config_service::AppConfigService;
