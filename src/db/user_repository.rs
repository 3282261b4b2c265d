// src/db/user_repository.rs
// DOCUMENTATION: User database operations
// PURPOSE: Accounts, credentials lookup and profile updates

use crate::errors::RentalError;
use crate::models::{RegisterRequest, User};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, phone, \
                            image_name, role, created_at";

/// Internal struct for mapping database rows to User
/// DOCUMENTATION: role is stored as TEXT and parsed on the way out
#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    username: String,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    phone: String,
    image_name: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn to_user(self) -> Result<User, RentalError> {
        let role = self.role.parse().map_err(|e: String| {
            log::error!("Corrupt role on user {}: {}", self.id, e);
            RentalError::DatabaseError(e)
        })?;

        Ok(User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            image_name: self.image_name,
            role,
            created_at: self.created_at,
        })
    }
}

pub struct UserRepository;

impl UserRepository {
    /// Insert a new account
    /// DOCUMENTATION: Username/email uniqueness is enforced by the table; violations become 409
    pub async fn create_user(
        pool: &PgPool,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<User, RentalError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, first_name, last_name, phone, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(req.username.trim())
        .bind(req.email.trim())
        .bind(password_hash)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.phone)
        .bind(req.role.as_str())
        .fetch_one(pool)
        .await
        .map_err(|e| RentalError::from_write(e, "Username or email already in use."))?;

        row.to_user()
    }

    /// Get user by ID
    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<User, RentalError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user {}: {}", id, e);
            RentalError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| RentalError::NotFound(format!("User with id {} not found.", id)))?;

        row.to_user()
    }

    /// Look up credentials for login
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, RentalError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user by email: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        row.map(UserRow::to_user).transpose()
    }

    pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, RentalError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list users: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(UserRow::to_user).collect()
    }

    /// 404 unless the user exists
    pub async fn ensure_exists(pool: &PgPool, id: i32) -> Result<(), RentalError> {
        let found: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to check user {}: {}", id, e);
                RentalError::DatabaseError(e.to_string())
            })?;

        found
            .map(|_| ())
            .ok_or_else(|| RentalError::NotFound(format!("User with id {} not found.", id)))
    }

    /// Persist the mutable profile fields of `user`
    pub async fn update_profile(pool: &PgPool, user: &User) -> Result<(), RentalError> {
        sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, phone = $4, image_name = $5
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(&user.image_name)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update user {}: {}", user.id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Delete an account; places, reservations, reviews and messages cascade
    pub async fn delete_user(pool: &PgPool, id: i32) -> Result<(), RentalError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete user {}: {}", id, e);
                RentalError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(RentalError::NotFound(format!("User with id {} not found.", id)));
        }

        Ok(())
    }
}
