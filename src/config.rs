use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::merge::SearchLimits;

/// How a search reacts when one of its queries fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// The first failing query fails the whole search
    #[default]
    FailFast,
    /// A failing query contributes no results; the search fails only if every query failed
    Isolated,
}

impl std::str::FromStr for FaultPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fail_fast" => Ok(FaultPolicy::FailFast),
            "isolated" => Ok(FaultPolicy::Isolated),
            other => Err(format!("Unknown fault policy: {}", other)),
        }
    }
}

/// Main search configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Base URL of the recipe service, without trailing endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Reaction to a failing query
    #[serde(default)]
    pub policy: FaultPolicy,
    /// Maximum number of merged results
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Number of leading category matches merged in
    #[serde(default = "default_category_take")]
    pub category_take: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            policy: FaultPolicy::default(),
            max_results: default_max_results(),
            category_take: default_category_take(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_results() -> usize {
    12
}

fn default_category_take() -> usize {
    8
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_results: self.max_results,
            category_take: self.category_take,
        }
    }
}

/// Load configuration from an optional `mealdb.toml` and `MEALDB__*` environment variables
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealdb").required(false))
        .add_source(
            Environment::with_prefix("MEALDB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.policy, FaultPolicy::FailFast);
        assert_eq!(config.limits(), SearchLimits::default());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("fail-fast".parse::<FaultPolicy>(), Ok(FaultPolicy::FailFast));
        assert_eq!("fail_fast".parse::<FaultPolicy>(), Ok(FaultPolicy::FailFast));
        assert_eq!("Isolated".parse::<FaultPolicy>(), Ok(FaultPolicy::Isolated));
        assert!("retry".parse::<FaultPolicy>().is_err());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: SearchConfig = Config::builder()
            .add_source(File::from_str(
                "base_url = \"http://localhost:9000\"\npolicy = \"isolated\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.policy, FaultPolicy::Isolated);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.max_results, 12);
        assert_eq!(config.category_take, 8);
    }

    #[test]
    fn test_load_config_without_file() {
        // Defaults cover every field, so loading never requires a file
        let result = load_config();
        assert!(result.is_ok());
    }
}
