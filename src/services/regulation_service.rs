// src/services/regulation_service.rs
// DOCUMENTATION: Business logic for place regulations

use crate::auth::AuthUser;
use crate::db::{PlaceRepository, RegulationRepository};
use crate::errors::RentalError;
use crate::models::{Regulation, RegulationRequest, RegulationResponse, UpdateRegulationRequest};
use crate::services::access::ensure_owner;
use sqlx::PgPool;

pub struct RegulationService;

impl RegulationService {
    pub async fn list_regulations(pool: &PgPool) -> Result<Vec<RegulationResponse>, RentalError> {
        let regulations = RegulationRepository::list_regulations(pool).await?;
        Ok(regulations.iter().map(|r| r.to_response()).collect())
    }

    pub async fn get_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<RegulationResponse, RentalError> {
        PlaceRepository::get_by_id(pool, place_id).await?;
        let regulation = RegulationRepository::find_by_place(pool, place_id)
            .await?
            .ok_or_else(|| {
                RentalError::NotFound(format!("Place {} has no regulations yet.", place_id))
            })?;
        Ok(regulation.to_response())
    }

    pub async fn create_regulation(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        req: RegulationRequest,
    ) -> Result<RegulationResponse, RentalError> {
        let place = PlaceRepository::get_by_id(pool, place_id).await?;
        ensure_owner(actor, &place)?;

        let regulation = RegulationRepository::create_regulation(pool, place_id, &req).await?;
        Ok(regulation.to_response())
    }

    pub async fn update_regulation(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        id: i32,
        req: UpdateRegulationRequest,
    ) -> Result<(), RentalError> {
        let mut regulation = Self::owned_regulation(pool, actor, place_id, id).await?;
        req.apply_to(&mut regulation);
        RegulationRepository::update_regulation(pool, &regulation).await
    }

    pub async fn delete_regulation(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        id: i32,
    ) -> Result<(), RentalError> {
        let regulation = Self::owned_regulation(pool, actor, place_id, id).await?;
        RegulationRepository::delete_regulation(pool, regulation.id).await
    }

    async fn owned_regulation(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        id: i32,
    ) -> Result<Regulation, RentalError> {
        let place = PlaceRepository::get_by_id(pool, place_id).await?;
        ensure_owner(actor, &place)?;

        let regulation = RegulationRepository::get_by_id(pool, id).await?;
        if regulation.place_id != place_id {
            return Err(RentalError::NotFound(format!(
                "Regulation with id {} not found for place {}.",
                id, place_id
            )));
        }
        Ok(regulation)
    }
}
