#[cfg(test)]
use crate::core::config::AuthConfig;
#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::shared::constants::ROLE_ADMIN;

#[cfg(test)]
use axum::{extract::Request, http::HeaderValue, middleware::Next, Router};

#[cfg(test)]
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
        issuer: "pearl-core-test".to_string(),
        token_ttl: std::time::Duration::from_secs(3600),
        jwt_leeway: std::time::Duration::from_secs(0),
        admin_email: "admin@pearl.com".to_string(),
        admin_password: "correct horse battery staple".to_string(),
    }
}

#[cfg(test)]
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "admin@pearl.com".to_string(),
        roles: vec![ROLE_ADMIN.to_string()],
    }
}

/// Wrap a router so every request arrives as `user`
#[cfg(test)]
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

/// Wrap a router so every request arrives as an authenticated admin
#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    with_user(router, create_admin_user())
}
