use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub swagger: SwaggerConfig,
    pub release: ReleaseConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Location of the JSON document file backing the prompt catalog
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
    pub token_ttl: Duration,
    pub jwt_leeway: Duration,
    pub admin_email: String,
    pub admin_password: String,
}

// Secrets stay out of logs
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("token_ttl", &self.token_ttl)
            .field("jwt_leeway", &self.jwt_leeway)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Mobile app release information served by `/api/config`
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub latest_version: String,
    pub min_required_version: String,
    pub update_url: String,
    pub message: String,
    pub force_update: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // `.env` is loaded once in `main`, before the subscriber starts
        Ok(Config {
            app: AppConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            release: ReleaseConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    const DEFAULT_DATA_FILE: &'static str = "data/prompts.json";

    pub fn from_env() -> Result<Self, String> {
        let data_file = env::var("DATA_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DATA_FILE.to_string());

        Ok(Self {
            data_file: PathBuf::from(data_file),
        })
    }
}

impl AuthConfig {
    const DEFAULT_ISSUER: &'static str = "pearl-core";
    const DEFAULT_TOKEN_TTL_SECS: u64 = 12 * 3600; // 12 hours
    const DEFAULT_JWT_LEEWAY_SECS: u64 = 60; // 1 minute
    const DEFAULT_ADMIN_EMAIL: &'static str = "admin@pearl.com";
    const MIN_SECRET_LEN: usize = 32;

    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET environment variable is required".to_string())?;
        if jwt_secret.len() < Self::MIN_SECRET_LEN {
            return Err(format!(
                "JWT_SECRET must be at least {} bytes",
                Self::MIN_SECRET_LEN
            ));
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| Self::DEFAULT_ISSUER.to_string());

        let token_ttl_secs = env::var("JWT_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "JWT_TTL_SECS must be a valid number".to_string())?;

        let jwt_leeway_secs = env::var("JWT_LEEWAY")
            .unwrap_or_else(|_| Self::DEFAULT_JWT_LEEWAY_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "JWT_LEEWAY must be a valid number".to_string())?;

        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| Self::DEFAULT_ADMIN_EMAIL.to_string());

        let admin_password = env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "ADMIN_PASSWORD environment variable is required".to_string())?;

        Ok(Self {
            jwt_secret,
            issuer,
            token_ttl: Duration::from_secs(token_ttl_secs),
            jwt_leeway: Duration::from_secs(jwt_leeway_secs),
            admin_email,
            admin_password,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Pearl API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Prompt catalog API for the Pearl app".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl ReleaseConfig {
    const DEFAULT_LATEST_VERSION: &'static str = "2.2.0";
    const DEFAULT_MIN_REQUIRED_VERSION: &'static str = "1.0.0";
    const DEFAULT_UPDATE_URL: &'static str =
        "https://play.google.com/store/apps/details?id=com.dipak.pearlai";
    const DEFAULT_MESSAGE: &'static str =
        "New features and better stability are available. Update now!";

    pub fn from_env() -> Result<Self, String> {
        let latest_version = env::var("APP_LATEST_VERSION")
            .unwrap_or_else(|_| Self::DEFAULT_LATEST_VERSION.to_string());
        let min_required_version = env::var("APP_MIN_REQUIRED_VERSION")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_REQUIRED_VERSION.to_string());
        let update_url =
            env::var("APP_UPDATE_URL").unwrap_or_else(|_| Self::DEFAULT_UPDATE_URL.to_string());
        let message =
            env::var("APP_UPDATE_MESSAGE").unwrap_or_else(|_| Self::DEFAULT_MESSAGE.to_string());
        let force_update = env::var("APP_FORCE_UPDATE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .map_err(|_| "APP_FORCE_UPDATE must be true or false".to_string())?;

        Ok(Self {
            latest_version,
            min_required_version,
            update_url,
            message,
            force_update,
        })
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            latest_version: Self::DEFAULT_LATEST_VERSION.to_string(),
            min_required_version: Self::DEFAULT_MIN_REQUIRED_VERSION.to_string(),
            update_url: Self::DEFAULT_UPDATE_URL.to_string(),
            message: Self::DEFAULT_MESSAGE.to_string(),
            force_update: false,
        }
    }
}
