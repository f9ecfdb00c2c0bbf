//! Post store process: serves the demo data over gRPC.

use std::sync::Arc;

use social_feed::{seed, store, telemetry, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    telemetry::init(config.log_format)?;

    let directory = Arc::new(seed::directory());
    let repo = seed::repository(directory)?;
    info!(posts = repo.len()?, "seeded post store");

    store::serve(repo, config.store_addr).await?;
    Ok(())
}
