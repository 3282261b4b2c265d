// src/services/access.rs
// DOCUMENTATION: Authorization rules shared by all services
// PURPOSE: Self, ownership and role checks; every failure is a 403

use crate::auth::AuthUser;
use crate::db::UserRepository;
use crate::errors::RentalError;
use crate::models::{Place, Role};
use sqlx::PgPool;

/// Tokens outlive deleted accounts; writes first confirm the caller still exists
pub async fn ensure_active(pool: &PgPool, actor: &AuthUser) -> Result<(), RentalError> {
    UserRepository::ensure_exists(pool, actor.id)
        .await
        .map_err(|e| match e {
            RentalError::NotFound(_) => {
                log::warn!("Token presented for deleted user {}", actor.id);
                RentalError::Unauthorized("Account no longer exists.".to_string())
            }
            other => other,
        })
}

/// The caller may only act on their own account
pub fn ensure_self(actor: &AuthUser, user_id: i32) -> Result<(), RentalError> {
    if actor.id != user_id {
        log::warn!("User {} attempted to act as user {}", actor.id, user_id);
        return Err(RentalError::Forbidden(
            "You can only perform this action on your own account.".to_string(),
        ));
    }
    Ok(())
}

/// The caller must be the account that listed the place
pub fn ensure_owner(actor: &AuthUser, place: &Place) -> Result<(), RentalError> {
    if actor.id != place.user_id {
        log::warn!("User {} is not the owner of place {}", actor.id, place.id);
        return Err(RentalError::Forbidden(
            "Only the owner of this place can perform this action.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_role(actor: &AuthUser, role: Role) -> Result<(), RentalError> {
    if actor.role != role {
        return Err(RentalError::Forbidden(format!(
            "This action requires the {} role.",
            role
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use chrono::Utc;

    fn actor(id: i32, role: Role) -> AuthUser {
        AuthUser {
            id,
            email: format!("user{}@example.com", id),
            role,
        }
    }

    fn place_owned_by(user_id: i32) -> Place {
        Place {
            id: 10,
            user_id,
            name: "Seaside Villa".to_string(),
            property_type: PropertyType::Villa,
            description: "Sea view".to_string(),
            main_image: None,
            cost: 250,
            country: "Greece".to_string(),
            city: "Chania".to_string(),
            address: "Akti 1".to_string(),
            latitude: 35.5,
            longitude: 24.0,
            area: 120,
            guests: 6,
            bedrooms: 3,
            beds: 4,
            bathrooms: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_ensure_self() {
        assert!(ensure_self(&actor(1, Role::User), 1).is_ok());
        assert!(matches!(
            ensure_self(&actor(1, Role::User), 2),
            Err(RentalError::Forbidden(_))
        ));
    }

    #[test]
    fn test_ensure_owner() {
        let place = place_owned_by(5);
        assert!(ensure_owner(&actor(5, Role::Owner), &place).is_ok());
        assert!(matches!(
            ensure_owner(&actor(6, Role::Owner), &place),
            Err(RentalError::Forbidden(_))
        ));
    }

    #[test]
    fn test_ensure_role() {
        assert!(ensure_role(&actor(1, Role::Owner), Role::Owner).is_ok());
        assert!(matches!(
            ensure_role(&actor(1, Role::User), Role::Owner),
            Err(RentalError::Forbidden(_))
        ));
    }
}
