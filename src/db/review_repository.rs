// src/db/review_repository.rs
// DOCUMENTATION: Review database operations
// PURPOSE: Handle CRUD operations for place reviews

use crate::errors::RentalError;
use crate::models::{Review, ReviewRequest};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const REVIEW_COLUMNS: &str = "id, user_id, place_id, rating, comment, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: i32,
    user_id: i32,
    place_id: i32,
    rating: String,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReviewRow {
    fn to_review(self) -> Result<Review, RentalError> {
        let rating = self.rating.parse().map_err(|e: String| {
            log::error!("Corrupt rating on review {}: {}", self.id, e);
            RentalError::DatabaseError(e)
        })?;

        Ok(Review {
            id: self.id,
            user_id: self.user_id,
            place_id: self.place_id,
            rating,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn to_reviews(rows: Vec<ReviewRow>) -> Result<Vec<Review>, RentalError> {
    rows.into_iter().map(ReviewRow::to_review).collect()
}

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review
    /// DOCUMENTATION: (user_id, place_id) is unique; a second review maps to 409
    pub async fn create_review(
        pool: &PgPool,
        user_id: i32,
        place_id: i32,
        req: &ReviewRequest,
    ) -> Result<Review, RentalError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            INSERT INTO reviews (user_id, place_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(place_id)
        .bind(req.rating.as_str())
        .bind(&req.comment)
        .fetch_one(pool)
        .await
        .map_err(|e| RentalError::from_write(e, "You have already reviewed this place."))?;

        row.to_review()
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Review, RentalError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch review {}: {}", id, e);
            RentalError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| RentalError::NotFound(format!("Review with id {} not found.", id)))?;

        row.to_review()
    }

    pub async fn list_reviews(pool: &PgPool) -> Result<Vec<Review>, RentalError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list reviews: {}", e);
            RentalError::DatabaseError(e.to_string())
        })?;

        to_reviews(rows)
    }

    /// Get reviews for a place, newest first
    pub async fn get_reviews_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<Vec<Review>, RentalError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            SELECT {REVIEW_COLUMNS} FROM reviews
            WHERE place_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(place_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reviews for place {}: {}", place_id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        to_reviews(rows)
    }

    pub async fn get_reviews_by_user(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<Review>, RentalError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            SELECT {REVIEW_COLUMNS} FROM reviews
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reviews of user {}: {}", user_id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        to_reviews(rows)
    }

    pub async fn update_review(pool: &PgPool, review: &Review) -> Result<(), RentalError> {
        sqlx::query(
            r#"
            UPDATE reviews
            SET rating = $2, comment = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(review.id)
        .bind(review.rating.as_str())
        .bind(&review.comment)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update review {}: {}", review.id, e);
            RentalError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn delete_review(pool: &PgPool, id: i32) -> Result<(), RentalError> {
        sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete review {}: {}", id, e);
                RentalError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
