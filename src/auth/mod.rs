// src/auth/mod.rs
// DOCUMENTATION: Authentication module organization
// PURPOSE: Re-export token, password and extractor components

pub mod extractor;
pub mod jwt;
pub mod password;
pub mod rate_limit;

pub use extractor::AuthUser;
pub use jwt::{create_token, verify_token, JwtConfig};
pub use password::{hash_password, verify_password};
pub use rate_limit::AuthRateLimiter;
