//! Party Roster server binary.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use party_roster::adapters::events::{FullRosterLogger, InMemoryEventBus, ROSTER_FILLED};
use party_roster::adapters::http::{app_router, RosterHandlers};
use party_roster::adapters::storage::{FileRosterRepository, InMemoryRosterRepository};
use party_roster::application::{
    CancelRosterHandler, CreateRosterHandler, GetRosterHandler, JoinFlexibleHandler,
    JoinSlotHandler, LeaveRosterHandler, ListOpenRostersHandler, RosterLocks,
};
use party_roster::config::{AppConfig, StorageBackend};
use party_roster::ports::{EventPublisher, EventSubscriber, RosterRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let repository: Arc<dyn RosterRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryRosterRepository::new()),
        StorageBackend::File => Arc::new(FileRosterRepository::new(&config.storage.data_dir)),
    };

    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe(ROSTER_FILLED, Arc::new(FullRosterLogger));
    let publisher: Arc<dyn EventPublisher> = bus;

    let locks = Arc::new(RosterLocks::new());
    let handlers = RosterHandlers::new(
        Arc::new(CreateRosterHandler::new(
            repository.clone(),
            publisher.clone(),
            config.roster.catalog()?,
            config.roster.seat_policy,
        )),
        Arc::new(JoinSlotHandler::new(
            repository.clone(),
            publisher.clone(),
            locks.clone(),
        )),
        Arc::new(JoinFlexibleHandler::new(
            repository.clone(),
            publisher.clone(),
            locks.clone(),
        )),
        Arc::new(LeaveRosterHandler::new(
            repository.clone(),
            publisher.clone(),
            locks.clone(),
        )),
        Arc::new(CancelRosterHandler::new(
            repository.clone(),
            publisher,
            locks,
        )),
        Arc::new(GetRosterHandler::new(repository.clone())),
        Arc::new(ListOpenRostersHandler::new(repository)),
    );

    let app = app_router(
        handlers,
        Duration::from_secs(config.server.request_timeout_secs),
    );
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        storage = ?config.storage.backend,
        seat_policy = ?config.roster.seat_policy,
        "party roster listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
