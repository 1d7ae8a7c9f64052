use anyhow::Result;
use tracing::info;

use jadoo_travel::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jadoo_travel=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting Jadoo Travel server");

    // Load configuration from environment
    let config = Config::from_env()?;

    server::serve(&config).await
}
