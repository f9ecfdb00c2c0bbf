//! Feed gateway process: timeline aggregation over the post store, served as
//! JSON over HTTP.

use std::sync::Arc;

use social_feed::{gateway, seed, telemetry, Config, StoreClient, Timeline};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    telemetry::init(config.log_format)?;

    let client = StoreClient::connect(config.store_endpoint.clone()).await?;
    let mut timeline = Timeline::new(Arc::new(seed::directory()), client);
    if let Some(timeout) = config.fanout_timeout() {
        info!(timeout_ms = timeout.as_millis() as u64, "fan-out deadline enabled");
        timeline = timeline.with_fanout_timeout(timeout);
    }

    gateway::serve(Arc::new(timeline), &config.http_addr.to_string()).await?;
    Ok(())
}
