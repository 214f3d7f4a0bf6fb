use alias_shortener::config::{self, Config};
use alias_shortener::server;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;

    tracing::info!(env = %config.env, "Starting URL shortener");
    tracing::debug!("debug messages are enabled");
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber: text for `local`, JSON otherwise.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.env.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
