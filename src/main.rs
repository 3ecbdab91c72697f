//! Account service entry point.
//!
//! Boots the HTTP server: environment loading, logging, MongoDB connection,
//! index creation and explicit service wiring through `AppState`.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_service::config::{AuthConfig, ServerConfig};
use account_service::core::AppState;
use account_service::db::Database;
use account_service::repositories::users::MongoUserRepository;
use account_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("starting account service...");

    let config = AuthConfig::from_env();

    let database = Arc::new(Database::new().await.expect("MongoDB connection failed"));

    let user_repo = Arc::new(MongoUserRepository::new(database.clone()));
    user_repo
        .create_indexes()
        .await
        .expect("user index creation failed");

    let state = web::Data::new(AppState::new(&config, user_repo));

    start_http_server(state).await
}

/// Configures and runs the HTTP server with CORS, request logging and
/// path normalization.
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("server listening on http://{}", bind_address);
    info!("health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// Loads the profile-specific env file.
///
/// `PROFILE=dev` loads `.env.dev` (the default), `PROFILE=prod` loads
/// `.env.prod`, anything else falls back to plain `.env`.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod loaded"),
            Err(e) => error!(".env.prod load failed: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev loaded"),
            Err(e) => error!(".env.dev load failed: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("default .env loaded");
        }
    }
}

/// `RUST_LOG` controls levels; the default keeps the service at info and
/// actix request handling at debug.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS for browser frontends. Origins come from `CORS_ORIGINS`; the
/// defaults allow the local development frontend.
fn configure_cors() -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in ServerConfig::cors_origins() {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
