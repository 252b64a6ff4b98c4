use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto, LoginRequestDto, MeResponseDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::token_service::TokenService;
use crate::shared::constants::ROLE_ADMIN;

/// Service for admin login against the configured credentials
pub struct AuthService {
    admin_email: String,
    admin_password_digest: [u8; 32],
    token_service: Arc<TokenService>,
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

impl AuthService {
    pub fn new(config: &AuthConfig, token_service: Arc<TokenService>) -> Self {
        Self {
            admin_email: config.admin_email.trim().to_lowercase(),
            admin_password_digest: digest(&config.admin_password),
            token_service,
        }
    }

    /// Login with email and password
    pub fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let email = dto.email.trim().to_lowercase();

        // Both checks always run; passwords are compared as SHA-256 digests
        let email_matches = email == self.admin_email;
        let password_matches = digest(&dto.password) == self.admin_password_digest;

        if !(email_matches && password_matches) {
            tracing::warn!("Failed admin login attempt for {}", email);
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let roles = vec![ROLE_ADMIN.to_string()];
        let token = self.token_service.create_token(&email, roles.clone())?;
        tracing::info!("Admin {} logged in", email);

        Ok(AuthResponseDto {
            access_token: token.access_token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
            user: AuthUserDto { email, roles },
        })
    }

    pub fn get_current_user(&self, user: AuthenticatedUser) -> MeResponseDto {
        MeResponseDto::from(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::JwtValidator;
    use crate::shared::test_helpers::test_auth_config;

    fn service() -> AuthService {
        let config = test_auth_config();
        AuthService::new(&config, Arc::new(TokenService::new(&config)))
    }

    fn login_dto(email: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_issues_verifiable_token() {
        let config = test_auth_config();
        let response = service()
            .login(login_dto("Admin@Pearl.com", &config.admin_password))
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user.email, "admin@pearl.com");

        let user = JwtValidator::new(&config)
            .validate_token(&response.access_token)
            .unwrap();
        assert_eq!(user.sub, "admin@pearl.com");
        assert!(user.is_admin());
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let result = service().login(login_dto("admin@pearl.com", "admin123"));
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_login_rejects_unknown_email() {
        let config = test_auth_config();
        let result = service().login(login_dto("someone@pearl.com", &config.admin_password));
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_validator_rejects_foreign_issuer() {
        let config = test_auth_config();
        let mut other = test_auth_config();
        other.issuer = "someone-else".to_string();

        let token = TokenService::new(&other)
            .create_token("admin@pearl.com", vec![ROLE_ADMIN.to_string()])
            .unwrap();

        let result = JwtValidator::new(&config).validate_token(&token.access_token);
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[test]
    fn test_validator_rejects_garbage() {
        let result = JwtValidator::new(&test_auth_config()).validate_token("not-a-token");
        assert!(matches!(result, Err(AppError::Auth(_))));
    }
}
