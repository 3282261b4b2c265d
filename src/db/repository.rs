// src/db/repository.rs
// DOCUMENTATION: Database access layer for places
// PURPOSE: Abstract place queries (CRUD and availability search) from business logic

use crate::errors::RentalError;
use crate::models::*;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const PLACE_COLUMNS: &str = "id, user_id, name, property_type, description, main_image, cost, \
                             country, city, address, latitude, longitude, area, guests, \
                             bedrooms, beds, bathrooms, created_at, updated_at";

/// Internal struct for mapping database rows to Place struct
/// DOCUMENTATION: property_type is TEXT in the table and parsed here
#[derive(Debug, FromRow)]
struct PlaceRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub property_type: String,
    pub description: String,
    pub main_image: Option<String>,
    pub cost: i32,
    pub country: String,
    pub city: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub area: i32,
    pub guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlaceRow {
    /// Convert PlaceRow to Place model
    fn to_place(self) -> Result<Place, RentalError> {
        let property_type = self.property_type.parse().map_err(|e: String| {
            log::error!("Corrupt property type on place {}: {}", self.id, e);
            RentalError::DatabaseError(e)
        })?;

        Ok(Place {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            property_type,
            description: self.description,
            main_image: self.main_image,
            cost: self.cost,
            country: self.country,
            city: self.city,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            area: self.area,
            guests: self.guests,
            bedrooms: self.bedrooms,
            beds: self.beds,
            bathrooms: self.bathrooms,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn to_places(rows: Vec<PlaceRow>) -> Result<Vec<Place>, RentalError> {
    rows.into_iter().map(PlaceRow::to_place).collect()
}

/// PlaceRepository: All database operations for places
pub struct PlaceRepository;

impl PlaceRepository {
    /// Create new place in database
    /// DOCUMENTATION: Inserts place owned by `owner_id` and returns created record
    /// Used by POST /api/places endpoint
    pub async fn create_place(
        pool: &PgPool,
        owner_id: i32,
        req: &PlaceRequest,
    ) -> Result<Place, RentalError> {
        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            INSERT INTO places (
                user_id, name, property_type, description, main_image, cost,
                country, city, address, latitude, longitude,
                area, guests, bedrooms, beds, bathrooms,
                created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6,
                $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16,
                NOW(), NOW()
            )
            RETURNING {PLACE_COLUMNS}
            "#
        ))
        .bind(owner_id) // $1
        .bind(&req.name) // $2
        .bind(req.property_type.as_str()) // $3
        .bind(&req.description) // $4
        .bind(&req.main_image) // $5
        .bind(req.cost) // $6
        .bind(&req.country) // $7
        .bind(&req.city) // $8
        .bind(&req.address) // $9
        .bind(req.latitude) // $10
        .bind(req.longitude) // $11
        .bind(req.area) // $12
        .bind(req.guests) // $13
        .bind(req.bedrooms) // $14
        .bind(req.beds) // $15
        .bind(req.bathrooms) // $16
        .fetch_one(pool)
        .await
        .map_err(|e| RentalError::from_write(e, "Place already exists."))?;

        row.to_place()
    }

    /// Get place by ID
    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Place, RentalError> {
        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch place {}: {}", id, e);
            RentalError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| RentalError::NotFound(format!("Place with id {} not found.", id)))?;

        row.to_place()
    }

    pub async fn list_places(pool: &PgPool) -> Result<Vec<Place>, RentalError> {
        let rows = sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places ORDER BY id"
        ))
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list places: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        to_places(rows)
    }

    /// Places listed by one owner
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Place>, RentalError> {
        let rows = sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list places of user {}: {}", user_id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        to_places(rows)
    }

    /// Places in a city/country with room for `guests` and no reservation
    /// touching [check_in, check_out]
    /// DOCUMENTATION: Uses the same inclusive overlap predicate as booking
    pub async fn find_available(
        pool: &PgPool,
        query: &AvailabilityQuery,
    ) -> Result<Vec<Place>, RentalError> {
        let rows = sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            SELECT {PLACE_COLUMNS}
            FROM places p
            WHERE LOWER(p.city) = LOWER($1)
              AND LOWER(p.country) = LOWER($2)
              AND p.guests >= $3
              AND NOT EXISTS (
                  SELECT 1 FROM reservations r
                  WHERE r.place_id = p.id
                    AND r.check_in <= $5
                    AND r.check_out >= $4
              )
            ORDER BY p.cost, p.id
            "#
        ))
        .bind(&query.city) // $1
        .bind(&query.country) // $2
        .bind(query.guests) // $3
        .bind(query.check_in) // $4
        .bind(query.check_out) // $5
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Availability search failed: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        to_places(rows)
    }

    /// Update place in database
    /// DOCUMENTATION: Writes every column of `place` and bumps updated_at
    pub async fn update_place(pool: &PgPool, place: &Place) -> Result<(), RentalError> {
        sqlx::query(
            r#"
            UPDATE places SET
                name = $2, property_type = $3, description = $4, main_image = $5, cost = $6,
                country = $7, city = $8, address = $9, latitude = $10, longitude = $11,
                area = $12, guests = $13, bedrooms = $14, beds = $15, bathrooms = $16,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(place.id)
        .bind(&place.name)
        .bind(place.property_type.as_str())
        .bind(&place.description)
        .bind(&place.main_image)
        .bind(place.cost)
        .bind(&place.country)
        .bind(&place.city)
        .bind(&place.address)
        .bind(place.latitude)
        .bind(place.longitude)
        .bind(place.area)
        .bind(place.guests)
        .bind(place.bedrooms)
        .bind(place.beds)
        .bind(place.bathrooms)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update place {}: {}", place.id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Delete a place; its reservations, reviews, facility and regulation cascade
    pub async fn delete_place(pool: &PgPool, id: i32) -> Result<(), RentalError> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete place {}: {}", id, e);
                RentalError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(RentalError::NotFound(format!("Place with id {} not found.", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ReservationRepository;
    use crate::models::{Role, StayDates};
    use crate::test_support::{db_pool, place_request, seed_user, unique};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn query(city: &str, guests: i32, a: &str, b: &str) -> AvailabilityQuery {
        AvailabilityQuery {
            city: city.to_uppercase(),
            country: "greece".to_string(),
            guests,
            check_in: date(a),
            check_out: date(b),
        }
    }

    fn ids(places: &[Place]) -> Vec<i32> {
        places.iter().map(|p| p.id).collect()
    }

    #[actix_web::test]
    async fn test_find_available_skips_booked_and_small_places() {
        let Some(pool) = db_pool().await else { return };
        let owner = seed_user(&pool, Role::Owner).await;
        let guest = seed_user(&pool, Role::User).await;
        let city = unique("chania");

        let booked = PlaceRepository::create_place(&pool, owner.id, &place_request(&city))
            .await
            .unwrap();
        let free = PlaceRepository::create_place(&pool, owner.id, &place_request(&city))
            .await
            .unwrap();
        let mut small_req = place_request(&city);
        small_req.guests = 1;
        let small = PlaceRepository::create_place(&pool, owner.id, &small_req)
            .await
            .unwrap();

        ReservationRepository::create_reservation(
            &pool,
            guest.id,
            booked.id,
            StayDates::new(date("2023-09-10"), date("2023-09-15")),
        )
        .await
        .unwrap();

        // Starting on the booked stay's check-out day still collides
        let found =
            PlaceRepository::find_available(&pool, &query(&city, 2, "2023-09-15", "2023-09-18"))
                .await
                .unwrap();
        assert_eq!(ids(&found), vec![free.id]);

        let found =
            PlaceRepository::find_available(&pool, &query(&city, 2, "2023-09-16", "2023-09-18"))
                .await
                .unwrap();
        assert_eq!(ids(&found), vec![booked.id, free.id]);

        let found =
            PlaceRepository::find_available(&pool, &query(&city, 1, "2023-09-16", "2023-09-18"))
                .await
                .unwrap();
        assert!(ids(&found).contains(&small.id));
        assert_eq!(found.len(), 3);
    }

    #[actix_web::test]
    async fn test_place_crud_round_trip() {
        let Some(pool) = db_pool().await else { return };
        let owner = seed_user(&pool, Role::Owner).await;

        let req = place_request(&unique("rethymno"));
        let created = PlaceRepository::create_place(&pool, owner.id, &req)
            .await
            .unwrap();
        let mut place = PlaceRepository::get_by_id(&pool, created.id).await.unwrap();
        assert_eq!(place.user_id, owner.id);
        assert_eq!(place.property_type, PropertyType::Apartment);

        place.cost = 140;
        place.property_type = PropertyType::Villa;
        PlaceRepository::update_place(&pool, &place).await.unwrap();
        let updated = PlaceRepository::get_by_id(&pool, created.id).await.unwrap();
        assert_eq!(updated.cost, 140);
        assert_eq!(updated.property_type, PropertyType::Villa);

        PlaceRepository::delete_place(&pool, created.id).await.unwrap();
        assert!(matches!(
            PlaceRepository::get_by_id(&pool, created.id).await,
            Err(RentalError::NotFound(_))
        ));
        assert!(matches!(
            PlaceRepository::delete_place(&pool, created.id).await,
            Err(RentalError::NotFound(_))
        ));
    }
}
