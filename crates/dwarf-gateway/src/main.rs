use clap::Parser;
use dwarf_core::{KvBackend, UrlStore};
use dwarf_gateway::cli::{Cli, StorageBackendArg};
use dwarf_gateway::{telemetry, App, AppState};
use dwarf_generator::AlphaGenerator;
use dwarf_shortener::{AllocationPolicy, KeySpace, MappingStore, PolicyError};
use dwarf_storage::{InMemoryBackend, RedisBackend};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::try_parse()?;
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.bind_addr(),
        base_url = %config.base_url,
        storage_backend = %config.storage,
        char_floor = config.char_floor,
        "starting dwarf"
    );

    let store = match config.storage {
        StorageBackendArg::InMemory => build_store(InMemoryBackend::new(), &config)?,
        StorageBackendArg::Redis => {
            let backend = RedisBackend::connect(&config.redis_url()).await?;
            info!(redis_server = %config.redis_server, redis_db = config.redis_db, "connected to redis");
            build_store(backend, &config)?
        }
    };

    let state = AppState::new(store, config.base_url.clone(), config.not_found_url.clone());
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_store<B: KvBackend>(backend: B, config: &Cli) -> Result<Arc<dyn UrlStore>, PolicyError> {
    let policy = AllocationPolicy::builder()
        .char_floor(config.char_floor)
        .max_length(config.max_code_length)
        .build();
    let store = MappingStore::new(backend, AlphaGenerator::new(), policy)?
        .with_key_space(KeySpace::new(config.namespace.as_str()));
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
