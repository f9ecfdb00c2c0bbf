//! Process settings, read from `FEED_`-prefixed environment variables.
//!
//! A `.env` file in the working directory is loaded first if present.
//!
//! | Variable | Default |
//! |---|---|
//! | `FEED_STORE_ADDR` | `127.0.0.1:50051` |
//! | `FEED_STORE_ENDPOINT` | `http://127.0.0.1:50051` |
//! | `FEED_HTTP_ADDR` | `127.0.0.1:8080` |
//! | `FEED_FANOUT_TIMEOUT_MS` | unset (no deadline) |
//! | `FEED_LOG_FORMAT` | `pretty` (or `json`) |

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "FEED_";

#[derive(Debug, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] envy::Error);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where `post-store` listens.
    #[serde(default = "default_store_addr")]
    pub store_addr: SocketAddr,
    /// What the gateway dials to reach the store.
    #[serde(default = "default_store_endpoint")]
    pub store_endpoint: String,
    #[serde(default = "default_http_addr")]
    pub http_addr: SocketAddr,
    #[serde(default)]
    pub fanout_timeout_ms: Option<u64>,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_store_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 50051))
}

fn default_store_endpoint() -> String {
    "http://127.0.0.1:50051".to_string()
}

fn default_http_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_addr: default_store_addr(),
            store_endpoint: default_store_endpoint(),
            http_addr: default_http_addr(),
            fanout_timeout_ms: None,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    /// Build from explicit key/value pairs (unprefixed, e.g. `STORE_ADDR`).
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into()));
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    pub fn fanout_timeout(&self) -> Option<Duration> {
        self.fanout_timeout_ms.map(Duration::from_millis)
    }
}
