// src/models/user.rs
// DOCUMENTATION: User accounts and authentication payloads
// PURPOSE: Serialization/validation models for /api/auth and /api/users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Account role. Only owners may list places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Owner => "OWNER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "OWNER" => Ok(Role::Owner),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// A user record from the users table
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// bcrypt hash, never serialized
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub image_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// POST /api/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub username: String,

    #[validate(custom = "crate::models::not_blank")]
    pub first_name: String,

    #[validate(custom = "crate::models::not_blank")]
    pub last_name: String,

    #[validate(custom = "crate::models::not_blank")]
    pub password: String,

    #[validate(email)]
    pub email: String,

    pub role: Role,

    #[validate(custom = "crate::models::not_blank")]
    pub phone: String,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub email: String,

    #[validate(custom = "crate::models::not_blank")]
    pub password: String,
}

/// Returned by register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i32,
}

/// PUT /api/users/{user_id}
/// Every field is optional; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub first_name: Option<String>,

    #[validate(custom = "crate::models::not_blank")]
    pub last_name: Option<String>,

    #[validate(custom = "crate::models::not_blank")]
    pub phone: Option<String>,

    #[validate(custom = "crate::models::not_blank")]
    pub image_name: Option<String>,
}

/// Public view of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub image_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            image_name: self.image_name.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_json(role: &str) -> String {
        format!(
            r#"{{"username":"jdoe","first_name":"Jane","last_name":"Doe",
                "password":"pw","email":"jane@example.com","role":"{}","phone":"555"}}"#,
            role
        )
    }

    #[test]
    fn test_role_round_trips_through_text() {
        for role in [Role::User, Role::Owner] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("ADMIN".parse::<Role>().is_err());
    }

    #[test]
    fn test_register_rejects_unknown_role() {
        assert!(serde_json::from_str::<RegisterRequest>(&register_json("ADMIN")).is_err());
        let req: RegisterRequest = serde_json::from_str(&register_json("OWNER")).unwrap();
        assert_eq!(req.role, Role::Owner);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let mut req: RegisterRequest = serde_json::from_str(&register_json("USER")).unwrap();
        req.first_name = "   ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_user_validates_present_fields_only() {
        assert!(UpdateUserRequest::default().validate().is_ok());

        let req = UpdateUserRequest {
            phone: Some("".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_hides_password_hash() {
        let user = User {
            id: 1,
            username: "jdoe".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: "555".to_string(),
            image_name: "userImg.jpg".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(user.to_response()).unwrap();
        assert_eq!(json["role"], "USER");
        assert!(json["created_at"].is_string());
        assert!(json.get("password_hash").is_none());
    }
}
