//! Service entry-point: logging, configuration, pool construction, startup.

use std::env;
use std::net::SocketAddr;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use sales_backend::outbound::persistence::{DbPool, PoolConfig};
use sales_backend::server::{ServerConfig, create_server, diesel_state};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/sales";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 15;

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

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let max_size = env::var("POOL_MAX_SIZE")
        .ok()
        .and_then(|raw| match raw.parse::<u32>() {
            Ok(size) => Some(size),
            Err(e) => {
                warn!(value = %raw, error = %e, "ignoring malformed POOL_MAX_SIZE");
                None
            }
        })
        .unwrap_or(DEFAULT_POOL_MAX_SIZE);

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
        .await
        .map_err(|e| std::io::Error::other(format!("pool construction failed: {e}")))?;

    create_server(ServerConfig::new(bind_addr, diesel_state(&pool)))?.await
}
