// src/services/review_service.rs
// DOCUMENTATION: Business logic for reviews
// PURPOSE: Only guests who booked a place may review it, once

use crate::auth::AuthUser;
use crate::db::{PlaceRepository, ReservationRepository, ReviewRepository, UserRepository};
use crate::errors::RentalError;
use crate::models::{Review, ReviewRequest, ReviewResponse, UpdateReviewRequest, UserResponse};
use crate::services::access::{ensure_active, ensure_self};
use sqlx::PgPool;

pub struct ReviewService;

impl ReviewService {
    pub async fn list_reviews(pool: &PgPool) -> Result<Vec<ReviewResponse>, RentalError> {
        let reviews = ReviewRepository::list_reviews(pool).await?;
        Ok(reviews.iter().map(|r| r.to_response()).collect())
    }

    /// Author of a review
    pub async fn user_by_review(pool: &PgPool, id: i32) -> Result<UserResponse, RentalError> {
        let review = ReviewRepository::get_by_id(pool, id).await?;
        let user = UserRepository::get_by_id(pool, review.user_id).await?;
        Ok(user.to_response())
    }

    pub async fn create_review(
        pool: &PgPool,
        actor: &AuthUser,
        place_id: i32,
        req: ReviewRequest,
    ) -> Result<ReviewResponse, RentalError> {
        ensure_active(pool, actor).await?;
        PlaceRepository::get_by_id(pool, place_id).await?;

        if !ReservationRepository::user_has_reserved(pool, actor.id, place_id).await? {
            return Err(RentalError::InvalidInput(
                "You can only review places you have reserved.".to_string(),
            ));
        }

        let review = ReviewRepository::create_review(pool, actor.id, place_id, &req).await?;
        log::info!("User {} reviewed place {}", actor.id, place_id);
        Ok(review.to_response())
    }

    pub async fn update_review(
        pool: &PgPool,
        actor: &AuthUser,
        user_id: i32,
        id: i32,
        req: UpdateReviewRequest,
    ) -> Result<(), RentalError> {
        ensure_self(actor, user_id)?;
        let mut review = Self::authored_by(pool, user_id, id).await?;

        if let Some(rating) = req.rating {
            review.rating = rating;
        }
        if let Some(comment) = req.comment {
            review.comment = Some(comment);
        }

        ReviewRepository::update_review(pool, &review).await
    }

    pub async fn delete_review(
        pool: &PgPool,
        actor: &AuthUser,
        user_id: i32,
        id: i32,
    ) -> Result<(), RentalError> {
        ensure_self(actor, user_id)?;
        let review = Self::authored_by(pool, user_id, id).await?;
        ReviewRepository::delete_review(pool, review.id).await
    }

    pub async fn reviews_by_user(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<ReviewResponse>, RentalError> {
        UserRepository::ensure_exists(pool, user_id).await?;
        let reviews = ReviewRepository::get_reviews_by_user(pool, user_id).await?;
        Ok(reviews.iter().map(|r| r.to_response()).collect())
    }

    pub async fn review_by_user(
        pool: &PgPool,
        user_id: i32,
        id: i32,
    ) -> Result<ReviewResponse, RentalError> {
        UserRepository::ensure_exists(pool, user_id).await?;
        let review = Self::authored_by(pool, user_id, id).await?;
        Ok(review.to_response())
    }

    pub async fn reviews_by_place(
        pool: &PgPool,
        place_id: i32,
    ) -> Result<Vec<ReviewResponse>, RentalError> {
        PlaceRepository::get_by_id(pool, place_id).await?;
        let reviews = ReviewRepository::get_reviews_by_place(pool, place_id).await?;
        Ok(reviews.iter().map(|r| r.to_response()).collect())
    }

    pub async fn review_by_place(
        pool: &PgPool,
        place_id: i32,
        id: i32,
    ) -> Result<ReviewResponse, RentalError> {
        PlaceRepository::get_by_id(pool, place_id).await?;
        let review = ReviewRepository::get_by_id(pool, id).await?;
        if review.place_id != place_id {
            return Err(RentalError::NotFound(format!(
                "Review with id {} not found for place {}.",
                id, place_id
            )));
        }
        Ok(review.to_response())
    }

    /// 404 unless review `id` was written by `user_id`
    async fn authored_by(pool: &PgPool, user_id: i32, id: i32) -> Result<Review, RentalError> {
        let review = ReviewRepository::get_by_id(pool, id).await?;
        if review.user_id != user_id {
            return Err(RentalError::NotFound(format!(
                "Review with id {} not found for user {}.",
                id, user_id
            )));
        }
        Ok(review)
    }
}
