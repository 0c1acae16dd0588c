use serde::{Deserialize, Serialize};

/// What a store does with a collection response that was issued before the
/// one it already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Whatever settles last is written, even if it was requested first.
    #[default]
    LastWriteWins,
    /// Collection replacements carry a sequence number; older ones are dropped.
    DiscardStale,
}

impl StaleResponsePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "last_write_wins" | "last-write-wins" | "lww" => Some(Self::LastWriteWins),
            "discard_stale" | "discard-stale" | "fenced" => Some(Self::DiscardStale),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub stale_response_policy: StaleResponsePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            stale_response_policy: StaleResponsePolicy::LastWriteWins,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            stale_response_policy: option_env!("STALE_RESPONSE_POLICY")
                .and_then(StaleResponsePolicy::parse)
                .unwrap_or_default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_aliases() {
        assert_eq!(StaleResponsePolicy::parse("LWW"), Some(StaleResponsePolicy::LastWriteWins));
        assert_eq!(StaleResponsePolicy::parse(" discard-stale "), Some(StaleResponsePolicy::DiscardStale));
        assert_eq!(StaleResponsePolicy::parse("newest"), None);
    }

    #[test]
    fn defaults_point_at_local_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.stale_response_policy, StaleResponsePolicy::LastWriteWins);
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
