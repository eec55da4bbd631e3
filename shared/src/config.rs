use std::time::Duration;
use tracing::warn;

/// Runtime configuration, resolved once at startup and passed down
/// explicitly. Nothing in the service reads the environment after this.
#[derive(Clone, Debug)]
pub struct Config {
    pub address: String,
    pub redis_url: String,
    pub disable_cache: bool,
    pub players_cache_ttl: Duration,
    pub lineup_cache_ttl: Duration,
}

impl Config {
    const DEFAULT_ADDRESS: &str = "0.0.0.0:1323";
    const DEFAULT_REDIS_URL: &str = "redis://:@localhost:6379/0";
    const DEFAULT_PLAYERS_CACHE_TTL_SECS: u64 = 5;
    const DEFAULT_LINEUP_CACHE_TTL_SECS: u64 = 10;

    pub fn from_env() -> Self {
        Self {
            address: std::env::var("SQUAD_ADDRESS")
                .unwrap_or_else(|_| Self::DEFAULT_ADDRESS.to_string()),
            redis_url: std::env::var("SQUAD_REDIS_URL")
                .unwrap_or_else(|_| Self::DEFAULT_REDIS_URL.to_string()),
            disable_cache: env_flag("SQUAD_DISABLE_CACHE"),
            players_cache_ttl: env_ttl(
                "SQUAD_PLAYERS_CACHE_TTL_SECS",
                Self::DEFAULT_PLAYERS_CACHE_TTL_SECS,
            ),
            lineup_cache_ttl: env_ttl(
                "SQUAD_LINEUP_CACHE_TTL_SECS",
                Self::DEFAULT_LINEUP_CACHE_TTL_SECS,
            ),
        }
    }
}

fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(raw) => raw.parse::<bool>().unwrap_or_else(|_| {
            warn!("{} is set but not a boolean, assuming false", name);
            false
        }),
        Err(_) => false,
    }
}

fn env_ttl(name: &str, default_secs: u64) -> Duration {
    let secs = match std::env::var(name) {
        Ok(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
            warn!("{} is set but not a number of seconds, using default", name);
            default_secs
        }),
        Err(_) => default_secs,
    };
    Duration::from_secs(secs)
}
