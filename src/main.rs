mod db;
mod errors;
mod handlers;
mod models;
mod routes;
mod state;
mod structs;
mod utils;

use std::sync::Arc;

use crate::db::memory::MemoryQrStore;
use crate::db::mongodb::{MongoQrStore, get_database};
use crate::db::store::QrStore;
use crate::state::app_state::AppState;
use crate::utils::config::{Config, StorageBackend};
use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use anyhow::Context;
use dotenv::dotenv;
use env_logger::Env;
use routes::init_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env()?;

    let store: Arc<dyn QrStore> = match &config.storage {
        StorageBackend::MongoDb { uri, database } => {
            let db = get_database(uri, database).await?;
            let store = MongoQrStore::new(db);
            store.ensure_indexes().await?;
            log::info!("Using MongoDB database {}", database);
            Arc::new(store)
        }
        StorageBackend::Memory => {
            log::warn!("Using in-memory storage, records are lost on restart");
            Arc::new(MemoryQrStore::new())
        }
    };

    let app_state = web::Data::new(AppState::new(store, config.base_url.clone()));
    let cors_origins = config.cors_allowed_origins.clone();

    log::info!(
        "Server running on {}:{} (public URL {})",
        config.bind_address,
        config.port,
        config.base_url
    );

    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        App::new()
            .wrap(logger)
            .wrap(build_cors(&cors_origins))
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind((config.bind_address.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.bind_address, config.port))?
    .run()
    .await
    .context("Server error")
}

fn build_cors(origins: &[String]) -> Cors {
    let cors = if origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT"])
        .allowed_headers(vec![http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(3600)
}
