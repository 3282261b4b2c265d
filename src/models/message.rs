// src/models/message.rs
// DOCUMENTATION: Direct messages between two users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A message joined with both participants' public details
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i32,
    pub sender_id: i32,
    pub sender_username: String,
    pub sender_image_name: String,
    pub receiver_id: i32,
    pub receiver_username: String,
    pub receiver_image_name: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Body of POST /api/users/{user_id}/messages/{other_user_id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: i32,
    pub sender_id: i32,
    pub sender_username: String,
    pub sender_image_name: String,
    pub receiver_id: i32,
    pub receiver_username: String,
    pub receiver_image_name: String,
    pub message: String,
    pub message_timestamp: DateTime<Utc>,
}

impl Message {
    pub fn to_response(&self) -> MessageResponse {
        MessageResponse {
            id: self.id,
            sender_id: self.sender_id,
            sender_username: self.sender_username.clone(),
            sender_image_name: self.sender_image_name.clone(),
            receiver_id: self.receiver_id,
            receiver_username: self.receiver_username.clone(),
            receiver_image_name: self.receiver_image_name.clone(),
            message: self.message.clone(),
            message_timestamp: self.sent_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_rejected() {
        let req = SendMessageRequest {
            message: "\n\t ".to_string(),
        };
        assert!(req.validate().is_err());

        let req = SendMessageRequest {
            message: "Is the villa free in May?".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
