//! Backend entry-point: loads settings, connects to PostgreSQL, and serves
//! the document API.

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use documents_backend::config::AppSettings;
use documents_backend::inbound::http::health::HealthState;
use documents_backend::outbound::persistence::{DbPool, PoolConfig};

mod server;

use server::{ServerConfig, create_server};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!(error = %err, "{context}");
    std::io::Error::other(format!("{context}: {err}"))
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

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| startup_error("failed to load settings", e))?;
    let database_url = settings
        .database_url()
        .map_err(|e| startup_error("invalid database settings", e))?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(|e| startup_error("failed to build database pool", e))?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), pool);
    let server = create_server(health_state, config)?;
    server.await
}
