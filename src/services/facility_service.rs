// src/services/facility_service.rs
// DOCUMENTATION: Business logic for place facilities

use crate::auth::AuthUser;
use crate::db::{FacilityRepository, PlaceRepository};
use crate::errors::RentalError;
use crate::models::{Facility, FacilityRequest, FacilityResponse, UpdateFacilityRequest};
use crate::services::access::ensure_owner;
use sqlx::PgPool;

pub struct FacilityService;

impl FacilityService {
    pub async fn list_facilities(pool: &PgPool) -> Result<Vec<FacilityResponse>, RentalError> {
        let facilities = FacilityRepository::list_facilities(pool).await?;
        Ok(facilities.iter().map(|f| f.to_response()).collect())
    }

    pub async fn get_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<FacilityResponse, RentalError> {
        PlaceRepository::get_by_id(pool, place_id).await?;
        let facility = FacilityRepository::find_by_place(pool, place_id)
            .await?
            .ok_or_else(|| {
                RentalError::NotFound(format!("Place {} has no facilities yet.", place_id))
            })?;
        Ok(facility.to_response())
    }

    pub async fn create_facility(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        req: FacilityRequest,
    ) -> Result<FacilityResponse, RentalError> {
        let place = PlaceRepository::get_by_id(pool, place_id).await?;
        ensure_owner(actor, &place)?;

        let facility = FacilityRepository::create_facility(pool, place_id, &req).await?;
        Ok(facility.to_response())
    }

    pub async fn update_facility(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        id: i32,
        req: UpdateFacilityRequest,
    ) -> Result<(), RentalError> {
        let mut facility = Self::owned_facility(pool, actor, place_id, id).await?;
        req.apply_to(&mut facility);
        FacilityRepository::update_facility(pool, &facility).await
    }

    pub async fn delete_facility(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        id: i32,
    ) -> Result<(), RentalError> {
        let facility = Self::owned_facility(pool, actor, place_id, id).await?;
        FacilityRepository::delete_facility(pool, facility.id).await
    }

    /// Owner check on the place, then 404 unless the facility belongs to it
    async fn owned_facility(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        id: i32,
    ) -> Result<Facility, RentalError> {
        let place = PlaceRepository::get_by_id(pool, place_id).await?;
        ensure_owner(actor, &place)?;

        let facility = FacilityRepository::get_by_id(pool, id).await?;
        if facility.place_id != place_id {
            return Err(RentalError::NotFound(format!(
                "Facility with id {} not found for place {}.",
                id, place_id
            )));
        }
        Ok(facility)
    }
}
