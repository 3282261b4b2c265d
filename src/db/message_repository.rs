// src/db/message_repository.rs
// DOCUMENTATION: Message database operations
// PURPOSE: Conversation summaries, chat history and sending

use crate::errors::RentalError;
use crate::models::Message;
use sqlx::PgPool;

/// Messages joined with sender and receiver profiles
const MESSAGE_SELECT: &str = r#"
    SELECT m.id,
           m.sender_id, s.username AS sender_username, s.image_name AS sender_image_name,
           m.receiver_id, r.username AS receiver_username, r.image_name AS receiver_image_name,
           m.message, m.sent_at
    FROM messages m
    JOIN users s ON s.id = m.sender_id
    JOIN users r ON r.id = m.receiver_id
"#;

pub struct MessageRepository;

impl MessageRepository {
    /// Latest message of every conversation `user_id` takes part in, newest first
    /// DOCUMENTATION: A conversation is the unordered pair of participants
    pub async fn latest_per_conversation(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<Message>, RentalError> {
        sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT * FROM (
                SELECT DISTINCT ON (LEAST(sub.sender_id, sub.receiver_id),
                                    GREATEST(sub.sender_id, sub.receiver_id))
                       sub.*
                FROM ({MESSAGE_SELECT}) sub
                WHERE sub.sender_id = $1 OR sub.receiver_id = $1
                ORDER BY LEAST(sub.sender_id, sub.receiver_id),
                         GREATEST(sub.sender_id, sub.receiver_id),
                         sub.sent_at DESC, sub.id DESC
            ) latest
            ORDER BY latest.sent_at DESC, latest.id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to load conversations of user {}: {}", user_id, e);
            RentalError::DatabaseError(e.to_string())
        })
    }

    /// Every message exchanged between two users, oldest first
    pub async fn chat_history(
        pool: &PgPool,
        user_id: i32,
        other_id: i32,
    ) -> Result<Vec<Message>, RentalError> {
        sqlx::query_as::<_, Message>(&format!(
            r#"
            {MESSAGE_SELECT}
            WHERE (m.sender_id = $1 AND m.receiver_id = $2)
               OR (m.sender_id = $2 AND m.receiver_id = $1)
            ORDER BY m.sent_at ASC, m.id ASC
            "#
        ))
        .bind(user_id)
        .bind(other_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to load chat {} <-> {}: {}", user_id, other_id, e);
            RentalError::DatabaseError(e.to_string())
        })
    }

    pub async fn send_message(
        pool: &PgPool,
        sender_id: i32,
        receiver_id: i32,
        text: &str,
    ) -> Result<Message, RentalError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO messages (sender_id, receiver_id, message, sent_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(text)
        .fetch_one(pool)
        .await
        .map_err(|e| RentalError::from_write(e, "Message already exists."))?;

        sqlx::query_as::<_, Message>(&format!("{MESSAGE_SELECT} WHERE m.id = $1"))
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to load message {}: {}", id, e);
                RentalError::DatabaseError(e.to_string())
            })
    }
}
