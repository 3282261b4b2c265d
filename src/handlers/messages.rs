// src/handlers/messages.rs
// DOCUMENTATION: HTTP handlers for direct messages

use crate::auth::AuthUser;
use crate::errors::RentalError;
use crate::models::SendMessageRequest;
use crate::services::MessageService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/users/{user_id}/messages
pub async fn conversations(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let messages = MessageService::conversations(pool.get_ref(), &auth, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(messages))
}

/// GET /api/users/{user_id}/messages/{other_user_id}
pub async fn chat_history(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (user_id, other_id) = path.into_inner();
    let messages = MessageService::chat_history(pool.get_ref(), &auth, user_id, other_id).await?;
    Ok(HttpResponse::Ok().json(messages))
}

/// POST /api/users/{user_id}/messages/{other_user_id}
pub async fn send_message(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    req: web::Json<SendMessageRequest>,
) -> Result<impl Responder, RentalError> {
    req.validate()?;

    let (user_id, other_id) = path.into_inner();
    let message =
        MessageService::send_message(pool.get_ref(), &auth, user_id, other_id, req.into_inner())
            .await?;
    Ok(HttpResponse::Created().json(message))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/{user_id}/messages", web::get().to(conversations))
        .route(
            "/users/{user_id}/messages/{other_user_id}",
            web::get().to(chat_history),
        )
        .route(
            "/users/{user_id}/messages/{other_user_id}",
            web::post().to(send_message),
        );
}
