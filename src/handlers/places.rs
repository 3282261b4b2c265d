// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::auth::AuthUser;
use crate::errors::RentalError;
use crate::models::{AvailabilityQuery, PlaceRequest, UpdatePlaceRequest};
use crate::services::PlaceService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /api/places
/// Create a new place owned by the caller
pub async fn create_place(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    req: web::Json<PlaceRequest>,
) -> Result<impl Responder, RentalError> {
    req.validate()?;

    let place = PlaceService::create_place(pool.get_ref(), &auth, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(place))
}

/// GET /api/places
pub async fn list_places(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, RentalError> {
    let places = PlaceService::list_places(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(places))
}

/// GET /api/places/{place_id}
/// Place with facility, regulation and reviews
pub async fn get_place(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let place = PlaceService::get_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// PUT /api/places/{place_id}
pub async fn update_place(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<UpdatePlaceRequest>,
) -> Result<impl Responder, RentalError> {
    req.validate()?;

    PlaceService::update_place(pool.get_ref(), &auth, path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/places/{place_id}
pub async fn delete_place(
    auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    PlaceService::delete_place(pool.get_ref(), &auth, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/places/{place_id}/owner
pub async fn get_owner(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, RentalError> {
    let owner = PlaceService::get_owner(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(owner))
}

/// GET /api/places/availability/{city}/{country}/{guests}/{check_in}/{check_out}
pub async fn available_places(
    _auth: AuthUser,
    pool: web::Data<PgPool>,
    path: web::Path<AvailabilityQuery>,
) -> Result<impl Responder, RentalError> {
    let places = PlaceService::available_places(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(places))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/places", web::get().to(list_places))
        .route("/places", web::post().to(create_place))
        .route(
            "/places/availability/{city}/{country}/{guests}/{check_in}/{check_out}",
            web::get().to(available_places),
        )
        .route("/places/{place_id}", web::get().to(get_place))
        .route("/places/{place_id}", web::put().to(update_place))
        .route("/places/{place_id}", web::delete().to(delete_place))
        .route("/places/{place_id}/owner", web::get().to(get_owner));
}

#[cfg(test)]
mod tests {
    use crate::handlers::routes;
    use crate::test_support;
    use crate::models::Role;
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::json;

    fn place_body() -> serde_json::Value {
        json!({
            "name": "Example Place",
            "property_type": "APARTMENT",
            "description": "A cozy apartment in the city center.",
            "cost": 100,
            "country": "Greece",
            "city": "Athens",
            "address": "123 Main Street",
            "latitude": 37.98,
            "longitude": 23.72,
            "area": 80,
            "guests": 2,
            "bedrooms": 1,
            "beds": 1,
            "bathrooms": 1
        })
    }

    #[actix_web::test]
    async fn test_guest_role_cannot_list_place() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/places")
            .insert_header((header::AUTHORIZATION, test_support::bearer(4, Role::User)))
            .set_json(place_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_negative_cost_is_bad_request() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let mut body = place_body();
        body["cost"] = json!(-5);
        let req = test::TestRequest::post()
            .uri("/api/places")
            .insert_header((header::AUTHORIZATION, test_support::bearer(4, Role::Owner)))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/places")
            .insert_header((header::AUTHORIZATION, test_support::bearer(4, Role::Owner)))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_availability_rejects_inverted_range() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/places/availability/Athens/Greece/2/2024-06-10/2024-06-01")
            .insert_header((header::AUTHORIZATION, test_support::bearer(4, Role::User)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_availability_rejects_bad_date() {
        let app = test::init_service(
            App::new()
                .configure(test_support::state)
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/places/availability/Athens/Greece/2/june/2024-06-01")
            .insert_header((header::AUTHORIZATION, test_support::bearer(4, Role::User)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_place_http_round_trip() {
        let Some(pool) = test_support::db_pool().await else { return };
        let owner = test_support::seed_user(&pool, Role::Owner).await;
        let token = test_support::bearer(owner.id, Role::Owner);
        let app = test::init_service(
            App::new()
                .configure(test_support::state_with_pool(pool))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/places")
            .insert_header((header::AUTHORIZATION, token.clone()))
            .set_json(place_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: serde_json::Value = test::read_body_json(resp).await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["owner_id"], owner.id);

        let req = test::TestRequest::put()
            .uri(&format!("/api/places/{}", id))
            .insert_header((header::AUTHORIZATION, token.clone()))
            .set_json(json!({ "cost": 150 }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/places/{}", id))
            .insert_header((header::AUTHORIZATION, token.clone()))
            .to_request();
        let detail: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["cost"], 150);
        assert_eq!(detail["name"], "Example Place");
        assert!(detail["reviews"].as_array().unwrap().is_empty());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/places/{}", id))
            .insert_header((header::AUTHORIZATION, token.clone()))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/places/{}", id))
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_missing_place_is_not_found() {
        let Some(pool) = test_support::db_pool().await else { return };
        let app = test::init_service(
            App::new()
                .configure(test_support::state_with_pool(pool))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/places/{}", i32::MAX))
            .insert_header((header::AUTHORIZATION, test_support::bearer(1, Role::User)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
