// src/services/auth_service.rs
// DOCUMENTATION: Registration and login
// PURPOSE: Hash/verify passwords and issue access tokens

use crate::auth::{create_token, hash_password, verify_password, JwtConfig};
use crate::db::UserRepository;
use crate::errors::RentalError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use sqlx::PgPool;

pub struct AuthService;

impl AuthService {
    /// Create an account and log it in
    pub async fn register(
        pool: &PgPool,
        jwt: &JwtConfig,
        req: RegisterRequest,
    ) -> Result<AuthResponse, RentalError> {
        let password = req.password.clone();
        let password_hash = run_blocking(move || hash_password(&password)).await??;

        let user = UserRepository::create_user(pool, &req, &password_hash).await?;
        log::info!("Registered user {} ({})", user.id, user.role);

        issue(&user, jwt)
    }

    /// Unknown email is a 404, a wrong password a 401
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtConfig,
        req: LoginRequest,
    ) -> Result<AuthResponse, RentalError> {
        let user = UserRepository::find_by_email(pool, req.email.trim())
            .await?
            .ok_or_else(|| RentalError::NotFound("No account with this email.".to_string()))?;

        let password = req.password;
        let stored = user.password_hash.clone();
        let matches = run_blocking(move || verify_password(&password, &stored)).await??;

        if !matches {
            log::info!("Failed login for user {}", user.id);
            return Err(RentalError::Unauthorized("Invalid credentials.".to_string()));
        }

        issue(&user, jwt)
    }
}

fn issue(user: &User, jwt: &JwtConfig) -> Result<AuthResponse, RentalError> {
    let token = create_token(user.id, &user.email, user.role.as_str(), jwt).map_err(|e| {
        log::error!("Failed to sign token for user {}: {}", user.id, e);
        RentalError::InternalError
    })?;

    Ok(AuthResponse { token, id: user.id })
}

/// bcrypt is CPU bound; keep it off the async workers
async fn run_blocking<T, F>(f: F) -> Result<T, RentalError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        log::error!("Blocking task failed: {}", e);
        RentalError::InternalError
    })
}
