mod config;
mod handlers;
mod proxy;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use parley_backend_sdk::HttpResearchBackend;
use std::path::PathBuf;
use tracing::info;

use crate::config::GatewayConfig;
use crate::proxy::ProxyState;

#[derive(Parser, Debug)]
#[command(author, version, about = "API gateway for the parley research dashboard", long_about = None)]
struct Args {
    /// Path to the gateway config file (created with defaults if missing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (mut config, config_path) = match args.config {
        Some(path) => GatewayConfig::load_from(path),
        None => GatewayConfig::load(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;
    info!(config = %config_path.display(), "Loaded gateway config");

    if let Some(port) = args.port {
        config.server.port = port;
    }

    let backend = HttpResearchBackend::new(&config.backend.base_url)
        .map_err(|e| anyhow::anyhow!("Invalid backend configuration: {e}"))?;
    let state = web::Data::new(ProxyState::new(
        backend,
        config.auth.clone().unwrap_or_default(),
    ));

    let bind_addr = (config.server.host.clone(), config.server.port);
    info!(
        host = %config.server.host,
        port = config.server.port,
        backend = %config.backend.base_url,
        "Starting parley-gateway"
    );

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        let cors = match &cors_config {
            Some(cors_config) => {
                let mut cors = Cors::default()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600);
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
                cors
            }
            None => Cors::default(),
        };

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(handlers::sessions::list_sessions)
            .service(handlers::sessions::create_session)
            .service(handlers::sessions::get_session)
            .service(handlers::sessions::update_session)
            .service(handlers::sessions::delete_session)
            .service(handlers::sessions::get_session_messages)
            .service(handlers::sessions::post_session_message)
            .service(handlers::sessions::get_questionnaire)
            .service(handlers::sessions::submit_questionnaire)
            .service(handlers::simulation::simulate)
            .service(handlers::simulation::progress)
            .service(handlers::simulation::completed)
            .service(handlers::simulation::completed_by_id)
            .service(handlers::simulation::analyze)
            .service(handlers::history::get_history)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
