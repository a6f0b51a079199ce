//! Application state and factory
//!
//! This module wires the ledger and the numbers repository to the storage
//! and delivery backends selected in configuration, and provides the
//! factory for creating the Actix-web application.

use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;
use thiserror::Error;

use ng_core::errors::DomainError;
use ng_core::repositories::{
    InMemoryNumberRepository, InMemoryPendingStore, InMemoryPhoneRecordRepository, NumberRepository,
    PendingVerificationStore, PhoneRecordRepository,
};
use ng_core::services::ledger::{
    policy_from_config, LedgerServiceConfig, SecureCodeGenerator, VerificationLedger,
};
use ng_infra::cache::{RedisClient, RedisPendingStore};
use ng_infra::database::{DatabasePool, MySqlNumberRepository, MySqlPhoneRecordRepository};
use ng_infra::sms::create_code_sender;
use ng_infra::InfrastructureError;
use ng_shared::config::{AppConfig, CorsConfig, PendingBackend, RecordBackend};

use crate::handlers::{json_error_handler, path_error_handler};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Failures while assembling the application state
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid ledger configuration: {0}")]
    Ledger(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

/// Shared services handed to every request handler
pub struct AppState {
    pub ledger: Arc<VerificationLedger>,
    pub numbers: Arc<dyn NumberRepository>,
    /// Present when records live in MySQL; probed by the health endpoint
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn new(ledger: Arc<VerificationLedger>, numbers: Arc<dyn NumberRepository>) -> Self {
        Self {
            ledger,
            numbers,
            database: None,
        }
    }

    /// Build the state from configuration, connecting to the selected backends
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let ledger_config = LedgerServiceConfig::from_config(&config.ledger)?;
        let sender = create_code_sender(&config.sms, config.ledger.code_expiration_minutes)?;

        let (records, numbers, database): (
            Arc<dyn PhoneRecordRepository>,
            Arc<dyn NumberRepository>,
            Option<DatabasePool>,
        ) = match config.storage.records {
            RecordBackend::Memory => {
                log::info!("Using in-memory record storage");
                (
                    Arc::new(InMemoryPhoneRecordRepository::new()),
                    Arc::new(InMemoryNumberRepository::new()),
                    None,
                )
            }
            RecordBackend::Mysql => {
                let pool = DatabasePool::new(&config.database).await?;
                pool.run_migrations().await?;
                (
                    Arc::new(MySqlPhoneRecordRepository::new(pool.get_pool())),
                    Arc::new(MySqlNumberRepository::new(pool.get_pool())),
                    Some(pool),
                )
            }
        };

        let pending: Arc<dyn PendingVerificationStore> = match config.storage.pending {
            PendingBackend::Memory => {
                log::info!("Using in-memory pending verification storage");
                Arc::new(InMemoryPendingStore::new())
            }
            PendingBackend::Redis => {
                let client = RedisClient::new(config.cache.clone()).await?;
                Arc::new(RedisPendingStore::new(client))
            }
        };

        let ledger = VerificationLedger::new(records, pending, sender, ledger_config)
            .with_code_generator(Arc::new(SecureCodeGenerator::new(config.ledger.code_length)))
            .with_fraud_policy(policy_from_config(&config.ledger.fraud_policy));

        Ok(Self {
            ledger: Arc::new(ledger),
            numbers,
            database,
        })
    }
}

/// Create and configure the application with all dependencies
///
/// # Arguments
/// * `state` - Shared services
/// * `cors` - Allowed origins for the dashboard
/// * `max_payload_size` - Largest accepted JSON body in bytes
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .configure(|cfg| routes::configure(cfg, max_payload_size))
}
