// src/auth/extractor.rs
// DOCUMENTATION: Authenticated caller extracted from the bearer token
// PURPOSE: Every protected handler takes an AuthUser parameter

use crate::auth::{verify_token, JwtConfig};
use crate::errors::RentalError;
use crate::models::Role;
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// The user acting on a request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = RentalError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, RentalError> {
    let config = req.app_data::<web::Data<JwtConfig>>().ok_or_else(|| {
        log::error!("JwtConfig is not registered as app data");
        RentalError::InternalError
    })?;

    let token = bearer_token(req)?;

    let claims = verify_token(token, config).map_err(|e| {
        log::debug!("Rejected bearer token: {}", e);
        RentalError::Unauthorized("Invalid or expired token".to_string())
    })?;

    let id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| RentalError::Unauthorized("Invalid token subject".to_string()))?;
    let role = claims
        .role
        .parse::<Role>()
        .map_err(|_| RentalError::Unauthorized("Invalid token role".to_string()))?;

    Ok(AuthUser {
        id,
        email: claims.email,
        role,
    })
}

fn bearer_token(req: &HttpRequest) -> Result<&str, RentalError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| RentalError::Unauthorized("Missing authorization header".to_string()))?;

    let value = value.to_str().map_err(|_| {
        RentalError::Unauthorized("Invalid authorization header encoding".to_string())
    })?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| RentalError::Unauthorized("Expected a bearer token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::create_token;
    use actix_web::test::TestRequest;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "extractor-secret".to_string(),
            expiration_hours: 1,
            issuer: "cameinw-backend".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_valid_token_yields_user() {
        let config = jwt_config();
        let token = create_token(3, "owner@example.com", "OWNER", &config).unwrap();
        let req = TestRequest::default()
            .app_data(web::Data::new(config))
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();

        let user = AuthUser::extract(&req).await.unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.email, "owner@example.com");
        assert_eq!(user.role, Role::Owner);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(web::Data::new(jwt_config()))
            .to_http_request();

        let err = AuthUser::extract(&req).await.unwrap_err();
        assert!(matches!(err, RentalError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(web::Data::new(jwt_config()))
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();

        let err = AuthUser::extract(&req).await.unwrap_err();
        assert!(matches!(err, RentalError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_garbage_token_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(web::Data::new(jwt_config()))
            .insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
            .to_http_request();

        let err = AuthUser::extract(&req).await.unwrap_err();
        assert!(matches!(err, RentalError::Unauthorized(_)));
    }
}
