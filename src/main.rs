//! Redis Cache - demo runner
//!
//! Connects to the configured Redis server, stores one value of each
//! supported type and reads it back.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_cache::{Cache, Config, Value};

/// Main entry point for the demo runner.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to Redis (flushing it unless FLUSH_ON_START=false)
/// 4. Store and read back sample values
/// 5. Log usage statistics
fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: redis_url={}, flush_on_start={}",
        config.redis_url, config.flush_on_start
    );

    let mut cache = Cache::from_config(&config)
        .with_context(|| format!("failed to connect to {}", config.redis_url))?;

    let samples = [
        Value::from("hello"),
        Value::from(b"\x00binary\xff".as_slice()),
        Value::from(42),
        Value::from(3.5),
    ];

    for sample in samples {
        let kind = sample.kind();
        let key = cache.store(sample).context("store failed")?;
        match kind {
            "text" => info!("{} -> {:?}", key, cache.get_str(&key)?),
            "integer" => info!("{} -> {:?}", key, cache.get_int(&key)?),
            "float" => info!("{} -> {:?}", key, cache.get_float(&key)?),
            _ => info!("{} -> {:?}", key, cache.get(&key)?),
        }
    }

    info!("Missing key -> {:?}", cache.get("no-such-key")?);
    info!("Stats: {}", serde_json::to_string(&cache.stats())?);

    Ok(())
}
