// src/handlers/facilities.rs
// DOCUMENTATION: HTTP handlers for place facilities

use crate::auth::AuthUser;
use crate::errors::RentalError;
use crate::models::{FacilityRequest, UpdateFacilityRequest};
use crate::services::FacilityService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /api/facilities
pub async fn list_facilities(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, RentalError> {
    let facilities = FacilityService::list_facilities(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(facilities))
}

/// GET /api/places/{place_id}/facilities
pub async fn get_facility(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let facility = FacilityService::get_by_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(facility))
}

/// POST /api/places/{place_id}/facilities
pub async fn create_facility(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<FacilityRequest>,
) -> Result<impl Responder, RentalError> {
    let facility =
        FacilityService::create_facility(pool.get_ref(), &auth, path.into_inner(), req.into_inner())
            .await?;
    Ok(HttpResponse::Created().json(facility))
}

/// PUT /api/places/{place_id}/facilities/{facility_id}
pub async fn update_facility(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    req: web::Json<UpdateFacilityRequest>,
) -> Result<impl Responder, RentalError> {
    let (place_id, id) = path.into_inner();
    FacilityService::update_facility(pool.get_ref(), &auth, place_id, id, req.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/places/{place_id}/facilities/{facility_id}
pub async fn delete_facility(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (place_id, id) = path.into_inner();
    FacilityService::delete_facility(pool.get_ref(), &auth, place_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/facilities", web::get().to(list_facilities))
        .route("/places/{place_id}/facilities", web::get().to(get_facility))
        .route(
            "/places/{place_id}/facilities",
            web::post().to(create_facility),
        )
        .route(
            "/places/{place_id}/facilities/{facility_id}",
            web::put().to(update_facility),
        )
        .route(
            "/places/{place_id}/facilities/{facility_id}",
            web::delete().to(delete_facility),
        );
}
