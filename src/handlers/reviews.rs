// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for reviews

use crate::auth::AuthUser;
use crate::errors::RentalError;
use crate::models::{ReviewRequest, UpdateReviewRequest};
use crate::services::ReviewService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /api/reviews
pub async fn list_reviews(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, RentalError> {
    let reviews = ReviewService::list_reviews(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /api/reviews/{review_id}/user
pub async fn user_by_review(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let user = ReviewService::user_by_review(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/places/{place_id}/reviews
pub async fn create_review(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<ReviewRequest>,
) -> Result<impl Responder, RentalError> {
    let review =
        ReviewService::create_review(pool.get_ref(), &auth, path.into_inner(), req.into_inner())
            .await?;
    Ok(HttpResponse::Created().json(review))
}

/// PUT /api/users/{user_id}/reviews/{review_id}
pub async fn update_review(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    req: web::Json<UpdateReviewRequest>,
) -> Result<impl Responder, RentalError> {
    let (user_id, id) = path.into_inner();
    ReviewService::update_review(pool.get_ref(), &auth, user_id, id, req.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/users/{user_id}/reviews/{review_id}
pub async fn delete_review(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (user_id, id) = path.into_inner();
    ReviewService::delete_review(pool.get_ref(), &auth, user_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/users/{user_id}/reviews
pub async fn reviews_by_user(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let reviews = ReviewService::reviews_by_user(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /api/users/{user_id}/reviews/{review_id}
pub async fn review_by_user(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (user_id, id) = path.into_inner();
    let review = ReviewService::review_by_user(pool.get_ref(), user_id, id).await?;
    Ok(HttpResponse::Ok().json(review))
}

/// GET /api/places/{place_id}/reviews
pub async fn reviews_by_place(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let reviews = ReviewService::reviews_by_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /api/places/{place_id}/reviews/{review_id}
pub async fn review_by_place(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (place_id, id) = path.into_inner();
    let review = ReviewService::review_by_place(pool.get_ref(), place_id, id).await?;
    Ok(HttpResponse::Ok().json(review))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/reviews", web::get().to(list_reviews))
        .route("/reviews/{review_id}/user", web::get().to(user_by_review))
        .route("/places/{place_id}/reviews", web::post().to(create_review))
        .route("/places/{place_id}/reviews", web::get().to(reviews_by_place))
        .route(
            "/places/{place_id}/reviews/{review_id}",
            web::get().to(review_by_place),
        )
        .route("/users/{user_id}/reviews", web::get().to(reviews_by_user))
        .route(
            "/users/{user_id}/reviews/{review_id}",
            web::get().to(review_by_user),
        )
        .route(
            "/users/{user_id}/reviews/{review_id}",
            web::put().to(update_review),
        )
        .route(
            "/users/{user_id}/reviews/{review_id}",
            web::delete().to(delete_review),
        );
}
