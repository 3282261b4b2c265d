// src/handlers/auth.rs
// DOCUMENTATION: HTTP handlers for registration and login
// PURPOSE: Public endpoints; everything else under /api needs the issued token

use crate::auth::{AuthRateLimiter, JwtConfig};
use crate::errors::RentalError;
use crate::models::{LoginRequest, RegisterRequest};
use crate::services::AuthService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Socket peer IP. Forwarding headers are client supplied and never used as the key.
fn client_key(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// POST /api/auth/register
pub async fn register(
    http: HttpRequest,
    pool: web::Data<PgPool>,
    jwt: web::Data<JwtConfig>,
    limiter: web::Data<AuthRateLimiter>,
    req: web::Json<RegisterRequest>,
) -> Result<impl Responder, RentalError> {
    limiter.check(&client_key(&http))?;
    req.validate()?;

    let auth = AuthService::register(pool.get_ref(), jwt.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(auth))
}

/// POST /api/auth/login
pub async fn login(
    http: HttpRequest,
    pool: web::Data<PgPool>,
    jwt: web::Data<JwtConfig>,
    limiter: web::Data<AuthRateLimiter>,
    req: web::Json<LoginRequest>,
) -> Result<impl Responder, RentalError> {
    limiter.check(&client_key(&http))?;
    req.validate()?;

    let auth = AuthService::login(pool.get_ref(), jwt.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(auth))
}

/// Configuration for auth routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login));
}
