pub mod auth_handler;

pub use auth_handler::{__path_get_me, __path_login, get_me, login};
