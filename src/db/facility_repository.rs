// src/db/facility_repository.rs
// DOCUMENTATION: Facility database operations

use crate::errors::RentalError;
use crate::models::{Facility, FacilityRequest};
use sqlx::PgPool;

const FACILITY_COLUMNS: &str =
    "id, place_id, free_parking, non_smoking, free_wifi, breakfast, balcony, swimming_pool";

pub struct FacilityRepository;

impl FacilityRepository {
    /// One facility record per place; a second insert maps to 409
    pub async fn create_facility(
        pool: &PgPool,
        place_id: i32,
        req: &FacilityRequest,
    ) -> Result<Facility, RentalError> {
        sqlx::query_as::<_, Facility>(&format!(
            r#"
            INSERT INTO facilities (
                place_id, free_parking, non_smoking, free_wifi, breakfast, balcony, swimming_pool
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {FACILITY_COLUMNS}
            "#
        ))
        .bind(place_id)
        .bind(req.free_parking)
        .bind(req.non_smoking)
        .bind(req.free_wifi)
        .bind(req.breakfast)
        .bind(req.balcony)
        .bind(req.swimming_pool)
        .fetch_one(pool)
        .await
        .map_err(|e| RentalError::from_write(e, "Facilities already exist for this place."))
    }

    pub async fn list_facilities(pool: &PgPool) -> Result<Vec<Facility>, RentalError> {
        sqlx::query_as::<_, Facility>(&format!(
            "SELECT {FACILITY_COLUMNS} FROM facilities ORDER BY id"
        ))
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list facilities: {}", e);
            RentalError::DatabaseError(e.to_string())
        })
    }

    pub async fn find_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<Option<Facility>, RentalError> {
        sqlx::query_as::<_, Facility>(&format!(
            "SELECT {FACILITY_COLUMNS} FROM facilities WHERE place_id = $1"
        ))
        .bind(place_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch facilities of place {}: {}", place_id, e);
            RentalError::DatabaseError(e.to_string())
        })
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Facility, RentalError> {
        sqlx::query_as::<_, Facility>(&format!(
            "SELECT {FACILITY_COLUMNS} FROM facilities WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch facility {}: {}", id, e);
            RentalError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| RentalError::NotFound(format!("Facility with id {} not found.", id)))
    }

    pub async fn update_facility(pool: &PgPool, facility: &Facility) -> Result<(), RentalError> {
        sqlx::query(
            r#"
            UPDATE facilities SET
                free_parking = $2, non_smoking = $3, free_wifi = $4,
                breakfast = $5, balcony = $6, swimming_pool = $7
            WHERE id = $1
            "#,
        )
        .bind(facility.id)
        .bind(facility.free_parking)
        .bind(facility.non_smoking)
        .bind(facility.free_wifi)
        .bind(facility.breakfast)
        .bind(facility.balcony)
        .bind(facility.swimming_pool)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update facility {}: {}", facility.id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn delete_facility(pool: &PgPool, id: i32) -> Result<(), RentalError> {
        sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete facility {}: {}", id, e);
                RentalError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
