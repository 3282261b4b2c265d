// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and mount them under /api

pub mod auth;
pub mod facilities;
pub mod health;
pub mod messages;
pub mod places;
pub mod regulations;
pub mod reservations;
pub mod reviews;
pub mod users;

pub use auth::config as auth_config;
pub use facilities::config as facilities_config;
pub use health::config as health_config;
pub use messages::config as messages_config;
pub use places::config as places_config;
pub use regulations::config as regulations_config;
pub use reservations::config as reservations_config;
pub use reviews::config as reviews_config;
pub use users::config as users_config;

use crate::errors::RentalError;
use actix_web::web;

/// Extractor settings so malformed bodies and path segments come back as 400
fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        RentalError::InvalidInput(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        RentalError::InvalidInput(err.to_string()).into()
    }));
}

/// Every route of the service
/// DOCUMENTATION: A single /api scope; scopes sharing a prefix would shadow each other
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(extractor_config)
        .configure(health_config)
        .service(
            web::scope("/api")
                .configure(auth_config)
                .configure(users_config)
                .configure(places_config)
                .configure(reservations_config)
                .configure(reviews_config)
                .configure(messages_config)
                .configure(facilities_config)
                .configure(regulations_config),
        );
}
