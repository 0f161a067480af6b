//! Backend entry-point: loads settings, wires the repository and serves the
//! employee REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employees_backend::inbound::http::health::HealthState;
use employees_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use employees_backend::settings::ServerSettings;

use server::{ServerConfig, create_server, shutdown_on_signal};

async fn apply_migrations(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");
    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let mut config = ServerConfig::new(settings.bind_addr()?);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            apply_migrations(database_url).await?;
        }
        let pool_config = PoolConfig::new(database_url).with_max_size(settings.max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(shutdown_on_signal(health_state, server.handle()));
    server.await
}
