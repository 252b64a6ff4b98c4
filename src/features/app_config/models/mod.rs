pub mod version;

pub use version::AppVersion;
