// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod auth;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

#[cfg(test)]
mod test_support;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use auth::{AuthRateLimiter, JwtConfig};
use config::Config;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize logging
    let config = Config::from_env();
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    // 3. Validate configuration
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Configuration error")?;

    log::info!("Starting cameinw-backend...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool and schema
    let pool = config::init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;
    config::run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    // 5. Shared auth state
    let jwt = web::Data::new(JwtConfig::from_config(&config));
    let limiter = web::Data::new(AuthRateLimiter::per_minute(config.auth_rate_limit_per_minute));
    log::info!(
        "Auth endpoints limited to {} attempts per minute per client",
        config.auth_rate_limit_per_minute
    );

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let pool = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            // Application state (database pool, token settings, limiter)
            .app_data(pool.clone())
            .app_data(jwt.clone())
            .app_data(limiter.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::routes)
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
