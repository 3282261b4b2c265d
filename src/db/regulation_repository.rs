// src/db/regulation_repository.rs
// DOCUMENTATION: Regulation database operations

use crate::errors::RentalError;
use crate::models::{Regulation, RegulationRequest};
use sqlx::{FromRow, PgPool};

const REGULATION_COLUMNS: &str = "id, place_id, arrival_time, departure_time, cancellation_policy, \
                                  payment_method, age_restriction, pets_allowed, events_allowed, \
                                  smoking_allowed, quiet_hours";

#[derive(Debug, FromRow)]
struct RegulationRow {
    id: i32,
    place_id: i32,
    arrival_time: String,
    departure_time: String,
    cancellation_policy: Option<String>,
    payment_method: String,
    age_restriction: bool,
    pets_allowed: bool,
    events_allowed: bool,
    smoking_allowed: bool,
    quiet_hours: Option<String>,
}

impl RegulationRow {
    fn to_regulation(self) -> Result<Regulation, RentalError> {
        let payment_method = self.payment_method.parse().map_err(|e: String| {
            log::error!("Corrupt payment method on regulation {}: {}", self.id, e);
            RentalError::DatabaseError(e)
        })?;

        Ok(Regulation {
            id: self.id,
            place_id: self.place_id,
            arrival_time: self.arrival_time,
            departure_time: self.departure_time,
            cancellation_policy: self.cancellation_policy,
            payment_method,
            age_restriction: self.age_restriction,
            pets_allowed: self.pets_allowed,
            events_allowed: self.events_allowed,
            smoking_allowed: self.smoking_allowed,
            quiet_hours: self.quiet_hours,
        })
    }
}

pub struct RegulationRepository;

impl RegulationRepository {
    /// One regulation record per place; a second insert maps to 409
    pub async fn create_regulation(
        pool: &PgPool,
        place_id: i32,
        req: &RegulationRequest,
    ) -> Result<Regulation, RentalError> {
        let row = sqlx::query_as::<_, RegulationRow>(&format!(
            r#"
            INSERT INTO regulations (
                place_id, arrival_time, departure_time, cancellation_policy, payment_method,
                age_restriction, pets_allowed, events_allowed, smoking_allowed, quiet_hours
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {REGULATION_COLUMNS}
            "#
        ))
        .bind(place_id)
        .bind(&req.arrival_time)
        .bind(&req.departure_time)
        .bind(&req.cancellation_policy)
        .bind(req.payment_method.as_str())
        .bind(req.age_restriction)
        .bind(req.pets_allowed)
        .bind(req.events_allowed)
        .bind(req.smoking_allowed)
        .bind(&req.quiet_hours)
        .fetch_one(pool)
        .await
        .map_err(|e| RentalError::from_write(e, "Regulations already exist for this place."))?;

        row.to_regulation()
    }

    pub async fn list_regulations(pool: &PgPool) -> Result<Vec<Regulation>, RentalError> {
        let rows = sqlx::query_as::<_, RegulationRow>(&format!(
            "SELECT {REGULATION_COLUMNS} FROM regulations ORDER BY id"
        ))
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list regulations: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(RegulationRow::to_regulation).collect()
    }

    pub async fn find_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<Option<Regulation>, RentalError> {
        let row = sqlx::query_as::<_, RegulationRow>(&format!(
            "SELECT {REGULATION_COLUMNS} FROM regulations WHERE place_id = $1"
        ))
        .bind(place_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch regulations of place {}: {}", place_id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        row.map(RegulationRow::to_regulation).transpose()
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Regulation, RentalError> {
        let row = sqlx::query_as::<_, RegulationRow>(&format!(
            "SELECT {REGULATION_COLUMNS} FROM regulations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch regulation {}: {}", id, e);
            RentalError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| RentalError::NotFound(format!("Regulation with id {} not found.", id)))?;

        row.to_regulation()
    }

    pub async fn update_regulation(
        pool: &PgPool,
        regulation: &Regulation,
    ) -> Result<(), RentalError> {
        sqlx::query(
            r#"
            UPDATE regulations SET
                arrival_time = $2, departure_time = $3, cancellation_policy = $4,
                payment_method = $5, age_restriction = $6, pets_allowed = $7,
                events_allowed = $8, smoking_allowed = $9, quiet_hours = $10
            WHERE id = $1
            "#,
        )
        .bind(regulation.id)
        .bind(&regulation.arrival_time)
        .bind(&regulation.departure_time)
        .bind(&regulation.cancellation_policy)
        .bind(regulation.payment_method.as_str())
        .bind(regulation.age_restriction)
        .bind(regulation.pets_allowed)
        .bind(regulation.events_allowed)
        .bind(regulation.smoking_allowed)
        .bind(&regulation.quiet_hours)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update regulation {}: {}", regulation.id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn delete_regulation(pool: &PgPool, id: i32) -> Result<(), RentalError> {
        sqlx::query("DELETE FROM regulations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete regulation {}: {}", id, e);
                RentalError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
