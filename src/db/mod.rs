// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod facility_repository;
pub mod message_repository;
pub mod regulation_repository;
pub mod repository;
pub mod reservation_repository;
pub mod review_repository;
pub mod user_repository;

pub use facility_repository::*;
pub use message_repository::*;
pub use regulation_repository::*;
pub use repository::*;
pub use reservation_repository::*;
pub use review_repository::*;
pub use user_repository::*;
