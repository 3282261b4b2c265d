// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod access;
pub mod auth_service;
pub mod facility_service;
pub mod message_service;
pub mod place_service;
pub mod regulation_service;
pub mod reservation_service;
pub mod review_service;
pub mod user_service;

pub use auth_service::*;
pub use facility_service::*;
pub use message_service::*;
pub use place_service::*;
pub use regulation_service::*;
pub use reservation_service::*;
pub use review_service::*;
pub use user_service::*;
