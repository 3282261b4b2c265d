// src/handlers/regulations.rs
// DOCUMENTATION: HTTP handlers for place regulations

use crate::auth::AuthUser;
use crate::errors::RentalError;
use crate::models::{RegulationRequest, UpdateRegulationRequest};
use crate::services::RegulationService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /api/regulations
pub async fn list_regulations(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, RentalError> {
    let regulations = RegulationService::list_regulations(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(regulations))
}

/// GET /api/places/{place_id}/regulations
pub async fn get_regulation(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let regulation = RegulationService::get_by_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(regulation))
}

/// POST /api/places/{place_id}/regulations
pub async fn create_regulation(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<RegulationRequest>,
) -> Result<impl Responder, RentalError> {
    req.validate()?;

    let regulation = RegulationService::create_regulation(
        pool.get_ref(),
        &auth,
        path.into_inner(),
        req.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Created().json(regulation))
}

/// PUT /api/places/{place_id}/regulations/{regulation_id}
pub async fn update_regulation(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
    req: web::Json<UpdateRegulationRequest>,
) -> Result<impl Responder, RentalError> {
    req.validate()?;

    let (place_id, id) = path.into_inner();
    RegulationService::update_regulation(pool.get_ref(), &auth, place_id, id, req.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/places/{place_id}/regulations/{regulation_id}
pub async fn delete_regulation(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (place_id, id) = path.into_inner();
    RegulationService::delete_regulation(pool.get_ref(), &auth, place_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/regulations", web::get().to(list_regulations))
        .route(
            "/places/{place_id}/regulations",
            web::get().to(get_regulation),
        )
        .route(
            "/places/{place_id}/regulations",
            web::post().to(create_regulation),
        )
        .route(
            "/places/{place_id}/regulations/{regulation_id}",
            web::put().to(update_regulation),
        )
        .route(
            "/places/{place_id}/regulations/{regulation_id}",
            web::delete().to(delete_regulation),
        );
}

#[cfg(test)]
mod tests {
    use crate::handlers::routes;
    use crate::test_support;
    use crate::models::Role;
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_blank_arrival_time_is_bad_request() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/places/1/regulations")
            .insert_header((header::AUTHORIZATION, test_support::bearer(1, Role::Owner)))
            .set_json(json!({
                "arrival_time": "",
                "departure_time": "11:00",
                "payment_method": "CASH_ONLY"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_requires_token() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/regulations").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
