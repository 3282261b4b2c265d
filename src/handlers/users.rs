// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for user accounts
// PURPOSE: Parse requests, call services, return responses

use crate::auth::AuthUser;
use crate::errors::RentalError;
use crate::models::UpdateUserRequest;
use crate::services::UserService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// GET /api/users
pub async fn list_users(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, RentalError> {
    let users = UserService::list_users(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/validUser
/// Succeeds whenever the bearer token is accepted
pub async fn valid_user(_auth: AuthUser) -> impl Responder {
    HttpResponse::Ok().json(json!({ "token": "valid" }))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let user = UserService::get_user(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
) -> Result<impl Responder, RentalError> {
    req.validate()?;
    UserService::update_user(pool.get_ref(), &auth, path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    UserService::delete_user(pool.get_ref(), &auth, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/users/{user_id}/places
pub async fn get_user_places(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let places = UserService::get_places_by_user(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(places))
}

/// GET /api/users/{user_id}/role
pub async fn get_user_role(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let role = UserService::get_user_role(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": role })))
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users))
        // Must precede /users/{user_id}
        .route("/users/validUser", web::get().to(valid_user))
        .route("/users/{user_id}", web::get().to(get_user))
        .route("/users/{user_id}", web::put().to(update_user))
        .route("/users/{user_id}", web::delete().to(delete_user))
        .route("/users/{user_id}/places", web::get().to(get_user_places))
        .route("/users/{user_id}/role", web::get().to(get_user_role));
}
