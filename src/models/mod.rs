// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components and shared field validators

pub mod facility;
pub mod message;
pub mod place;
pub mod regulation;
pub mod reservation;
pub mod review;
pub mod user;

pub use facility::*;
pub use message::*;
pub use place::*;
pub use regulation::*;
pub use reservation::*;
pub use review::*;
pub use user::*;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
