use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use evently_api::config::ApiConfig;
use evently_api::database::bookings::{BookingStore, PgBookingStore};
use evently_api::database::event_spaces::{EventSpaceStore, PgEventSpaceStore};
use evently_api::database::Database;
use evently_api::handlers;
use evently_api::integrations::supabase_auth::{AuthVerifier, SupabaseAuthVerifier};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
    /// Path to api.toml; defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("evently-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.as_deref());

    let (config, config_path) = ApiConfig::load(args.config.as_deref())?;
    tracing::info!("Loaded config from {}", config_path.display());

    let db = Database::connect(&config.database)?;
    let space_store: Arc<dyn EventSpaceStore> = Arc::new(PgEventSpaceStore::new(db.pool.clone()));
    let booking_store: Arc<dyn BookingStore> = Arc::new(PgBookingStore::new(db.pool.clone()));
    let verifier: Arc<dyn AuthVerifier> = Arc::new(SupabaseAuthVerifier::new(&config.supabase));

    let (host, port) = config.server_address();
    tracing::info!("Server will listen on {}:{}", host, port);

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        let cors = match &cors_config {
            Some(cors_config) => cors_config
                .allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
            None => Cors::default().allow_any_origin(),
        };
        let cors = cors
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                "Authorization",
                "Accept",
                "Content-Type",
                "apikey",
                "x-client-info",
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::from(space_store.clone()))
            .app_data(web::Data::from(booking_store.clone()))
            .app_data(web::Data::from(verifier.clone()))
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }

        tracing::info!("Ctrl+C received, shutting down...");
        handle.stop(true).await;
    });

    server.await?;
    Ok(())
}
