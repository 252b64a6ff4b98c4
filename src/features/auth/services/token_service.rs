use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::TokenClaims;

/// Issues HS256 access tokens accepted by [`JwtValidator`](crate::features::auth::JwtValidator)
pub struct TokenService {
    encoding_key: EncodingKey,
    issuer: String,
    ttl_secs: i64,
}

/// Signed token together with its lifetime in seconds
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            ttl_secs: config.token_ttl.as_secs() as i64,
        }
    }

    pub fn create_token(&self, subject: &str, roles: Vec<String>) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now + self.ttl_secs,
            roles,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            access_token,
            expires_in: self.ttl_secs,
        })
    }
}
