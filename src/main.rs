// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, then start the HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::GeoapifyClient;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting emergency-locator service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Provider client, shared read-only by every worker
    let client = web::Data::new(GeoapifyClient::new(&config));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let allowed_origin = config.cors_allowed_origin.clone();
    log::info!("CORS allowed origin: {}", allowed_origin);

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            // Middleware
            .wrap(handlers::cors(&allowed_origin))
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::nearby_config)
            .configure(handlers::location_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
