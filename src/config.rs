use std::env;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const FINISH_CLOSE_DELAY_MS: u64 = 800;
const CLOSED_FLOW_TTL_SECS: u64 = 300;
const IDLE_FLOW_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Pause between the finish toast and the automatic close.
    pub finish_close_delay: Duration,
    pub cors_allowed_origin: Option<String>,
    /// How long a closed experience stays reopenable before eviction.
    pub closed_flow_ttl: Duration,
    pub idle_flow_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: HOST.to_string(),
            port: PORT,
            finish_close_delay: Duration::from_millis(FINISH_CLOSE_DELAY_MS),
            cors_allowed_origin: None,
            closed_flow_ttl: Duration::from_secs(CLOSED_FLOW_TTL_SECS),
            idle_flow_ttl: Duration::from_secs(IDLE_FLOW_TTL_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        if cfg!(debug_assertions) {
            dotenv::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);
        let finish_close_delay = lookup("FINISH_CLOSE_DELAY_MS")
            .and_then(|value| value.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.finish_close_delay);
        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|value| !value.is_empty());
        let closed_flow_ttl = lookup("CLOSED_FLOW_TTL_SECS")
            .and_then(|value| value.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.closed_flow_ttl);
        let idle_flow_ttl = lookup("IDLE_FLOW_TTL_SECS")
            .and_then(|value| value.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.idle_flow_ttl);

        AppConfig {
            host,
            port,
            finish_close_delay,
            cors_allowed_origin,
            closed_flow_ttl,
            idle_flow_ttl,
        }
    }
}
