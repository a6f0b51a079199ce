use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use ng_api::app::{create_app, AppState};
use ng_api::config::load_config;
use ng_shared::config::{Environment, LogFormat};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, environment-specific file first
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    let config = load_config().context("Failed to load configuration")?;

    // Initialize logger
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::new().default_filter_or(config.logging.filter_directive()),
    );
    logger
        .format_target(config.logging.format == LogFormat::Pretty)
        .format_module_path(config.logging.source_location);
    if !config.logging.timestamp {
        logger.format_timestamp(None);
    }
    logger.init();

    info!("Starting NumGuard API Server ({})", config.environment);
    info!(
        "Storage: records={:?}, pending={:?}; SMS provider: {}",
        config.storage.records, config.storage.pending, config.sms.provider
    );

    let state = web::Data::new(
        AppState::from_config(&config)
            .await
            .context("Failed to initialize application state")?,
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let max_payload = config.server.max_payload_size;
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, max_payload))
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("NumGuard API Server stopped");
    Ok(())
}
