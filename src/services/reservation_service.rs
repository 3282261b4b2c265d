// src/services/reservation_service.rs
// DOCUMENTATION: Booking and reservation lookups

use crate::auth::AuthUser;
use crate::db::{PlaceRepository, ReservationRepository, UserRepository};
use crate::errors::RentalError;
use crate::models::{PlaceResponse, Reservation, ReservationRequest, StayDates};
use crate::services::access::ensure_active;
use sqlx::PgPool;

pub struct ReservationService;

impl ReservationService {
    /// Book `place_id` for the caller
    pub async fn make_reservation(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        req: ReservationRequest,
    ) -> Result<Reservation, RentalError> {
        let stay = StayDates::from(req);
        if !stay.is_valid() {
            return Err(RentalError::InvalidInput(
                "Check-in date must be before check-out date.".to_string(),
            ));
        }
        ensure_active(pool, actor).await?;

        let reservation =
            ReservationRepository::create_reservation(pool, actor.id, place_id, stay).await?;
        log::info!(
            "User {} reserved place {} ({} - {})",
            actor.id,
            place_id,
            stay.check_in,
            stay.check_out
        );
        Ok(reservation)
    }

    pub async fn reservations_by_user(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<Reservation>, RentalError> {
        UserRepository::ensure_exists(pool, user_id).await?;
        ReservationRepository::list_by_user(pool, user_id).await
    }

    /// 404 unless the reservation was made by `user_id`
    pub async fn reservation_by_user(
        pool: &PgPool,
        user_id: i32,
        id: i32,
    ) -> Result<Reservation, RentalError> {
        UserRepository::ensure_exists(pool, user_id).await?;
        let reservation = ReservationRepository::get_by_id(pool, id).await?;
        if reservation.user_id != user_id {
            return Err(RentalError::NotFound(format!(
                "Reservation with id {} not found for user {}.",
                id, user_id
            )));
        }
        Ok(reservation)
    }

    pub async fn reservations_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<Vec<Reservation>, RentalError> {
        PlaceRepository::get_by_id(pool, place_id).await?;
        ReservationRepository::list_by_place(pool, place_id).await
    }

    /// 404 unless the reservation is for `place_id`
    pub async fn reservation_by_place(
        pool: &PgPool,
        place_id: i32,
        id: i32,
    ) -> Result<Reservation, RentalError> {
        PlaceRepository::get_by_id(pool, place_id).await?;
        let reservation = ReservationRepository::get_by_id(pool, id).await?;
        if reservation.place_id != place_id {
            return Err(RentalError::NotFound(format!(
                "Reservation with id {} not found for place {}.",
                id, place_id
            )));
        }
        Ok(reservation)
    }

    pub async fn place_by_reservation(
        pool: &PgPool,
        id: i32,
    ) -> Result<PlaceResponse, RentalError> {
        let reservation = ReservationRepository::get_by_id(pool, id).await?;
        let place = PlaceRepository::get_by_id(pool, reservation.place_id).await?;
        Ok(place.to_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::test_support::{actor, db_pool, seed_place, seed_user};
    use chrono::NaiveDate;

    fn request(a: (u32, u32), b: (u32, u32)) -> ReservationRequest {
        ReservationRequest {
            check_in: NaiveDate::from_ymd_opt(2023, a.0, a.1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2023, b.0, b.1).unwrap(),
        }
    }

    #[actix_web::test]
    async fn test_back_to_back_booking_is_conflict() {
        let Some(pool) = db_pool().await else { return };
        let owner = seed_user(&pool, Role::Owner).await;
        let first = seed_user(&pool, Role::User).await;
        let second = seed_user(&pool, Role::User).await;
        let place = seed_place(&pool, &owner).await;

        let booked = ReservationService::make_reservation(
            &pool,
            &actor(&first),
            place.id,
            request((9, 10), (9, 15)),
        )
        .await
        .unwrap();
        assert_eq!(booked.user_id, first.id);

        let result = ReservationService::make_reservation(
            &pool,
            &actor(&second),
            place.id,
            request((9, 15), (9, 20)),
        )
        .await;
        assert!(matches!(result, Err(RentalError::Conflict(_))));

        let mine = ReservationService::reservation_by_user(&pool, first.id, booked.id)
            .await
            .unwrap();
        assert_eq!(mine.place_id, place.id);
        assert!(matches!(
            ReservationService::reservation_by_user(&pool, second.id, booked.id).await,
            Err(RentalError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_token_of_deleted_user_cannot_book() {
        let Some(pool) = db_pool().await else { return };
        let owner = seed_user(&pool, Role::Owner).await;
        let guest = seed_user(&pool, Role::User).await;
        let place = seed_place(&pool, &owner).await;
        let stale = actor(&guest);
        UserRepository::delete_user(&pool, guest.id).await.unwrap();

        let result =
            ReservationService::make_reservation(&pool, &stale, place.id, request((9, 10), (9, 15)))
                .await;
        assert!(matches!(result, Err(RentalError::Unauthorized(_))));
        assert!(ReservationRepository::list_by_place(&pool, place.id)
            .await
            .unwrap()
            .is_empty());
    }
}
