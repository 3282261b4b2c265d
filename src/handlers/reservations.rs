// src/handlers/reservations.rs
// DOCUMENTATION: HTTP handlers for reservations

use crate::auth::AuthUser;
use crate::errors::RentalError;
use crate::models::ReservationRequest;
use crate::services::ReservationService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// POST /api/places/{place_id}/reservations
/// Book the place for the caller
pub async fn make_reservation(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<ReservationRequest>,
) -> Result<impl Responder, RentalError> {
    let reservation = ReservationService::make_reservation(
        pool.get_ref(),
        &auth,
        path.into_inner(),
        req.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Created().json(reservation))
}

/// GET /api/users/{user_id}/reservations
pub async fn reservations_by_user(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let reservations =
        ReservationService::reservations_by_user(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reservations))
}

/// GET /api/users/{user_id}/reservations/{reservation_id}
pub async fn reservation_by_user(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (user_id, id) = path.into_inner();
    let reservation = ReservationService::reservation_by_user(pool.get_ref(), user_id, id).await?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// GET /api/places/{place_id}/reservations
pub async fn reservations_by_place(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let reservations =
        ReservationService::reservations_by_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reservations))
}

/// GET /api/places/{place_id}/reservations/{reservation_id}
pub async fn reservation_by_place(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<(i32, i32)>,
) -> Result<impl Responder, RentalError> {
    let (place_id, id) = path.into_inner();
    let reservation =
        ReservationService::reservation_by_place(pool.get_ref(), place_id, id).await?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// GET /api/reservations/{reservation_id}/place
pub async fn place_by_reservation(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let place = ReservationService::place_by_reservation(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(place))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/places/{place_id}/reservations",
        web::post().to(make_reservation),
    )
    .route(
        "/places/{place_id}/reservations",
        web::get().to(reservations_by_place),
    )
    .route(
        "/places/{place_id}/reservations/{reservation_id}",
        web::get().to(reservation_by_place),
    )
    .route(
        "/users/{user_id}/reservations",
        web::get().to(reservations_by_user),
    )
    .route(
        "/users/{user_id}/reservations/{reservation_id}",
        web::get().to(reservation_by_user),
    )
    .route(
        "/reservations/{reservation_id}/place",
        web::get().to(place_by_reservation),
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
    async fn test_checkout_before_checkin_is_bad_request() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/places/1/reservations")
            .insert_header((header::AUTHORIZATION, test_support::bearer(2, Role::User)))
            .set_json(json!({ "check_in": "2023-09-15", "check_out": "2023-09-10" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_same_day_stay_is_bad_request() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/places/1/reservations")
            .insert_header((header::AUTHORIZATION, test_support::bearer(2, Role::User)))
            .set_json(json!({ "check_in": "2023-09-10", "check_out": "2023-09-10" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_reservation_requires_token() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/places/1/reservations")
            .set_json(json!({ "check_in": "2023-09-10", "check_out": "2023-09-15" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
