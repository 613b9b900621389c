use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod errors;
mod models;

use config::Config;
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let db = Database::new(&config.database_url)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let db = Arc::new(db);
    log::info!("Database ready at {}", config.database_url);

    if config.seed_demo_notes {
        match db.seed_demo_notes() {
            Ok(0) => log::debug!("Notes table not empty, skipping demo seed"),
            Ok(n) => log::info!("Seeded {} demo notes", n),
            Err(e) => log::warn!("Failed to seed demo notes: {}", e),
        }
    }

    let port = config.port;
    log::info!("Starting notes backend on 0.0.0.0:{}", port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
            }))
            // Extractor failures go through the same error envelope as
            // handler failures.
            .app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(errors::query_error_handler))
            .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::notes::config)
    })
    .bind(("0.0.0.0", port))?
    .run();

    let server_handle = server.handle();

    // Ctrl+C handler for graceful shutdown
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
    });

    server.await
}
