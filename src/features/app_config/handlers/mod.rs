pub mod config_handler;

pub use config_handler::{__path_get_app_config, get_app_config};
