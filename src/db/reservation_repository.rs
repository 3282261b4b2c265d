// src/db/reservation_repository.rs
// DOCUMENTATION: Reservation database operations
// PURPOSE: Conflict-checked booking and reservation lookups

use crate::errors::RentalError;
use crate::models::{Reservation, StayDates};
use sqlx::PgPool;

pub struct ReservationRepository;

impl ReservationRepository {
    /// Book a place for a user
    /// DOCUMENTATION: Locks the place row so concurrent bookings of the same place
    /// run their conflict check one after another. The overlap test is inclusive:
    /// existing.check_in <= new.check_out AND existing.check_out >= new.check_in
    pub async fn create_reservation(
        pool: &PgPool,
        user_id: i32,
        place_id: i32,
        stay: StayDates,
    ) -> Result<Reservation, RentalError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to open reservation transaction: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        let place: Option<(i32,)> = sqlx::query_as("SELECT id FROM places WHERE id = $1 FOR UPDATE")
            .bind(place_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to lock place {}: {}", place_id, e);
                RentalError::DatabaseError(e.to_string())
            })?;

        if place.is_none() {
            return Err(RentalError::NotFound(format!(
                "Place with id {} not found.",
                place_id
            )));
        }

        let (conflicting,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM reservations
                WHERE place_id = $1
                  AND check_in <= $3
                  AND check_out >= $2
            )
            "#,
        )
        .bind(place_id)
        .bind(stay.check_in)
        .bind(stay.check_out)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            log::error!("Conflict check failed for place {}: {}", place_id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        if conflicting {
            log::info!(
                "Rejected reservation of place {} for {} - {}",
                place_id,
                stay.check_in,
                stay.check_out
            );
            return Err(RentalError::Conflict(
                "The place is already reserved for the requested dates.".to_string(),
            ));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (user_id, place_id, check_in, check_out)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, place_id, check_in, check_out, created_at
            "#,
        )
        .bind(user_id)
        .bind(place_id)
        .bind(stay.check_in)
        .bind(stay.check_out)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RentalError::from_write(e, "Reservation already exists."))?;

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit reservation: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        Ok(reservation)
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Reservation, RentalError> {
        sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, user_id, place_id, check_in, check_out, created_at
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reservation {}: {}", id, e);
            RentalError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| RentalError::NotFound(format!("Reservation with id {} not found.", id)))
    }

    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Reservation>, RentalError> {
        sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, user_id, place_id, check_in, check_out, created_at
            FROM reservations
            WHERE user_id = $1
            ORDER BY check_in, id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list reservations of user {}: {}", user_id, e);
            RentalError::DatabaseError(e.to_string())
        })
    }

    pub async fn list_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<Vec<Reservation>, RentalError> {
        sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, user_id, place_id, check_in, check_out, created_at
            FROM reservations
            WHERE place_id = $1
            ORDER BY check_in, id
            "#,
        )
        .bind(place_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list reservations of place {}: {}", place_id, e);
            RentalError::DatabaseError(e.to_string())
        })
    }

    /// Whether the user has ever booked the place
    pub async fn user_has_reserved(
        pool: &PgPool,
        user_id: i32,
        place_id: i32,
    ) -> Result<bool, RentalError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM reservations WHERE user_id = $1 AND place_id = $2)",
        )
        .bind(user_id)
        .bind(place_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Reservation lookup failed: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::test_support::{db_pool, seed_place, seed_user};
    use chrono::NaiveDate;

    fn stay(a: &str, b: &str) -> StayDates {
        StayDates::new(
            NaiveDate::parse_from_str(a, "%Y-%m-%d").unwrap(),
            NaiveDate::parse_from_str(b, "%Y-%m-%d").unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_booking_conflicts_are_inclusive() {
        let Some(pool) = db_pool().await else { return };
        let owner = seed_user(&pool, Role::Owner).await;
        let guest = seed_user(&pool, Role::User).await;
        let place = seed_place(&pool, &owner).await;

        ReservationRepository::create_reservation(
            &pool,
            guest.id,
            place.id,
            stay("2023-09-10", "2023-09-15"),
        )
        .await
        .unwrap();

        let clashing = [
            ("2023-09-15", "2023-09-20"), // starts on the check-out day
            ("2023-09-05", "2023-09-10"), // ends on the check-in day
            ("2023-09-11", "2023-09-12"),
            ("2023-09-01", "2023-09-30"),
        ];
        for (a, b) in clashing {
            let result =
                ReservationRepository::create_reservation(&pool, guest.id, place.id, stay(a, b))
                    .await;
            assert!(
                matches!(result, Err(RentalError::Conflict(_))),
                "{} - {} should conflict",
                a,
                b
            );
        }

        for (a, b) in [("2023-09-16", "2023-09-20"), ("2023-09-01", "2023-09-09")] {
            ReservationRepository::create_reservation(&pool, guest.id, place.id, stay(a, b))
                .await
                .unwrap();
        }

        let booked = ReservationRepository::list_by_place(&pool, place.id).await.unwrap();
        assert_eq!(booked.len(), 3);
        assert!(ReservationRepository::user_has_reserved(&pool, guest.id, place.id)
            .await
            .unwrap());
    }

    #[actix_web::test]
    async fn test_booking_unknown_place_is_not_found() {
        let Some(pool) = db_pool().await else { return };
        let guest = seed_user(&pool, Role::User).await;

        let result = ReservationRepository::create_reservation(
            &pool,
            guest.id,
            i32::MAX,
            stay("2023-09-10", "2023-09-15"),
        )
        .await;
        assert!(matches!(result, Err(RentalError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_booking_for_deleted_user_is_not_a_server_error() {
        let Some(pool) = db_pool().await else { return };
        let owner = seed_user(&pool, Role::Owner).await;
        let guest = seed_user(&pool, Role::User).await;
        let place = seed_place(&pool, &owner).await;
        crate::db::UserRepository::delete_user(&pool, guest.id).await.unwrap();

        let result = ReservationRepository::create_reservation(
            &pool,
            guest.id,
            place.id,
            stay("2023-09-10", "2023-09-15"),
        )
        .await;
        assert!(matches!(result, Err(RentalError::NotFound(_))));
    }
}
