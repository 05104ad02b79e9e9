use abicus_site::{config, server};
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("abicus_site=info".parse()?),
        )
        .init();

    info!("Starting Abicus site v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env()?;
    info!("Base URL: {}", config.base_url);

    server::serve(config).await
}
