// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and repository, handles access rules

use crate::auth::AuthUser;
use crate::db::{
    FacilityRepository, PlaceRepository, RegulationRepository, ReviewRepository, UserRepository,
};
use crate::errors::RentalError;
use crate::models::{
    AvailabilityQuery, PlaceDetailResponse, PlaceRequest, PlaceResponse, Role, StayDates,
    UpdatePlaceRequest, UserResponse,
};
use crate::services::access::{ensure_active, ensure_owner, ensure_role};
use sqlx::PgPool;

pub struct PlaceService;

impl PlaceService {
    /// Create a new place owned by the caller
    pub async fn create_place(
        pool: &PgPool,
        actor: &AuthUser,
        req: PlaceRequest,
    ) -> Result<PlaceResponse, RentalError> {
        ensure_role(actor, Role::Owner)?;
        ensure_active(pool, actor).await?;
        let place = PlaceRepository::create_place(pool, actor.id, &req).await?;
        log::info!("User {} ({}) listed place {}", actor.id, actor.email, place.id);
        Ok(place.to_response())
    }

    pub async fn list_places(pool: &PgPool) -> Result<Vec<PlaceResponse>, RentalError> {
        let places = PlaceRepository::list_places(pool).await?;
        Ok(places.iter().map(|p| p.to_response()).collect())
    }

    /// Get a place with its facility, regulation and reviews
    pub async fn get_place(pool: &PgPool, id: i32) -> Result<PlaceDetailResponse, RentalError> {
        let place = PlaceRepository::get_by_id(pool, id).await?;
        let facility = FacilityRepository::find_by_place(pool, place.id).await?;
        let regulation = RegulationRepository::find_by_place(pool, place.id).await?;
        let reviews = ReviewRepository::get_reviews_by_place(pool, place.id).await?;

        Ok(PlaceDetailResponse {
            place: place.to_response(),
            facility: facility.map(|f| f.to_response()),
            regulation: regulation.map(|r| r.to_response()),
            reviews: reviews.into_iter().map(|r| r.to_response()).collect(),
        })
    }

    /// Update a place; only its owner may do so
    pub async fn update_place(
        pool: &PgPool,
        actor: &AuthUser,
        id: i32,
        req: UpdatePlaceRequest,
    ) -> Result<(), RentalError> {
        let mut place = PlaceRepository::get_by_id(pool, id).await?;
        ensure_owner(actor, &place)?;

        req.apply_to(&mut place);
        PlaceRepository::update_place(pool, &place).await
    }

    pub async fn delete_place(pool: &PgPool, actor: &AuthUser, id: i32) -> Result<(), RentalError> {
        let place = PlaceRepository::get_by_id(pool, id).await?;
        ensure_owner(actor, &place)?;

        PlaceRepository::delete_place(pool, id).await?;
        log::info!("User {} removed place {}", actor.id, id);
        Ok(())
    }

    pub async fn get_owner(pool: &PgPool, id: i32) -> Result<UserResponse, RentalError> {
        let place = PlaceRepository::get_by_id(pool, id).await?;
        let owner = UserRepository::get_by_id(pool, place.user_id).await?;
        Ok(owner.to_response())
    }

    /// Places free for the whole stay that fit the party
    pub async fn available_places(
        pool: &PgPool,
        query: AvailabilityQuery,
    ) -> Result<Vec<PlaceResponse>, RentalError> {
        if !StayDates::new(query.check_in, query.check_out).is_valid() {
            return Err(RentalError::InvalidInput(
                "Check-in date must be before check-out date.".to_string(),
            ));
        }
        if query.guests < 1 {
            return Err(RentalError::InvalidInput(
                "Number of guests must be at least 1.".to_string(),
            ));
        }

        let places = PlaceRepository::find_available(pool, &query).await?;
        Ok(places.iter().map(|p| p.to_response()).collect())
    }
}
