// src/services/message_service.rs
// DOCUMENTATION: Direct messaging between users

use crate::auth::AuthUser;
use crate::db::{MessageRepository, UserRepository};
use crate::errors::RentalError;
use crate::models::{MessageResponse, SendMessageRequest};
use crate::services::access::{ensure_active, ensure_self};
use sqlx::PgPool;

pub struct MessageService;

impl MessageService {
    /// Inbox view: the newest message of each conversation
    pub async fn conversations(
        pool: &PgPool,
        actor: &AuthUser,
        user_id: i32,
    ) -> Result<Vec<MessageResponse>, RentalError> {
        ensure_self(actor, user_id)?;
        UserRepository::ensure_exists(pool, user_id).await?;

        let messages = MessageRepository::latest_per_conversation(pool, user_id).await?;
        Ok(messages.iter().map(|m| m.to_response()).collect())
    }

    pub async fn chat_history(
        pool: &PgPool,
        actor: &AuthUser,
        user_id: i32,
        other_id: i32,
    ) -> Result<Vec<MessageResponse>, RentalError> {
        ensure_self(actor, user_id)?;
        UserRepository::ensure_exists(pool, user_id).await?;
        UserRepository::ensure_exists(pool, other_id).await?;

        let messages = MessageRepository::chat_history(pool, user_id, other_id).await?;
        Ok(messages.iter().map(|m| m.to_response()).collect())
    }

    pub async fn send_message(
        pool: &PgPool,
        actor: &AuthUser,
        user_id: i32,
        other_id: i32,
        req: SendMessageRequest,
    ) -> Result<MessageResponse, RentalError> {
        ensure_self(actor, user_id)?;
        if user_id == other_id {
            return Err(RentalError::InvalidInput(
                "You cannot send a message to yourself.".to_string(),
            ));
        }
        ensure_active(pool, actor).await?;
        UserRepository::ensure_exists(pool, other_id).await?;

        let message = MessageRepository::send_message(pool, user_id, other_id, &req.message).await?;
        log::debug!("Message {} sent from {} to {}", message.id, user_id, other_id);
        Ok(message.to_response())
    }
}
