// src/services/user_service.rs
// DOCUMENTATION: Business logic for user accounts

use crate::auth::AuthUser;
use crate::db::{PlaceRepository, UserRepository};
use crate::errors::RentalError;
use crate::models::{PlaceSummary, Role, UpdateUserRequest, UserResponse};
use crate::services::access::ensure_self;
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    pub async fn list_users(pool: &PgPool) -> Result<Vec<UserResponse>, RentalError> {
        let users = UserRepository::list_users(pool).await?;
        Ok(users.iter().map(|u| u.to_response()).collect())
    }

    pub async fn get_user(pool: &PgPool, id: i32) -> Result<UserResponse, RentalError> {
        let user = UserRepository::get_by_id(pool, id).await?;
        Ok(user.to_response())
    }

    /// Partial profile update, only on the caller's own account
    pub async fn update_user(
        pool: &PgPool,
        actor: &AuthUser,
        id: i32,
        req: UpdateUserRequest,
    ) -> Result<(), RentalError> {
        ensure_self(actor, id)?;
        let mut user = UserRepository::get_by_id(pool, id).await?;

        if let Some(v) = req.first_name {
            user.first_name = v;
        }
        if let Some(v) = req.last_name {
            user.last_name = v;
        }
        if let Some(v) = req.phone {
            user.phone = v;
        }
        if let Some(v) = req.image_name {
            user.image_name = v;
        }

        UserRepository::update_profile(pool, &user).await
    }

    pub async fn delete_user(pool: &PgPool, actor: &AuthUser, id: i32) -> Result<(), RentalError> {
        ensure_self(actor, id)?;
        UserRepository::delete_user(pool, id).await?;
        log::info!("Deleted user {}", id);
        Ok(())
    }

    pub async fn get_places_by_user(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<PlaceSummary>, RentalError> {
        UserRepository::ensure_exists(pool, user_id).await?;
        let places = PlaceRepository::list_by_user(pool, user_id).await?;
        Ok(places.iter().map(|p| p.to_summary()).collect())
    }

    pub async fn get_user_role(pool: &PgPool, id: i32) -> Result<Role, RentalError> {
        let user = UserRepository::get_by_id(pool, id).await?;
        Ok(user.role)
    }
}
