use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub mod defaults;
pub mod duration_serde;

use crate::errors::{AppError, AppResult};
use defaults::*;

/// Process-wide configuration, built once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the rendered playlist is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Region codes whose sources are fetched (exact, case-sensitive match)
    #[serde(default = "default_target_regions")]
    pub target_regions: Vec<String>,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub structured_feed: StructuredFeedConfig,
    #[serde(default)]
    pub health_check: HealthCheckConfig,
    #[serde(default)]
    pub playlist: PlaylistConfig,
}

/// Plain-text playlist and feed download settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(with = "duration_serde::duration", default = "default_fetch_timeout")]
    pub timeout: Duration,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// The shared compressed channel feed used by structured-feed sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredFeedConfig {
    #[serde(default = "default_structured_feed_url")]
    pub url: String,
    /// Prefix joined with the expanded slug to build a playable URL
    #[serde(default = "default_stream_base_url")]
    pub stream_base_url: String,
    /// Used when the feed does not carry its own `slug` template
    #[serde(default = "default_slug_template")]
    pub default_slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckConfig {
    #[serde(with = "duration_serde::duration", default = "default_probe_timeout")]
    pub timeout: Duration,
    /// Worker pool size; derived from available parallelism when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
    /// Log progress every N completed probes
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// Cap applied to each category row when inspecting a playlist
    #[serde(default = "default_max_row_items")]
    pub max_row_items: usize,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_target_regions() -> Vec<String> {
    DEFAULT_TARGET_REGIONS.iter().map(|r| r.to_string()).collect()
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_structured_feed_url() -> String {
    DEFAULT_STRUCTURED_FEED_URL.to_string()
}

fn default_stream_base_url() -> String {
    DEFAULT_STREAM_BASE_URL.to_string()
}

fn default_slug_template() -> String {
    DEFAULT_SLUG_TEMPLATE.to_string()
}

fn default_probe_timeout() -> Duration {
    Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS)
}

fn default_progress_interval() -> usize {
    DEFAULT_PROGRESS_INTERVAL
}

fn default_max_row_items() -> usize {
    DEFAULT_MAX_ROW_ITEMS
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StructuredFeedConfig {
    fn default() -> Self {
        Self {
            url: default_structured_feed_url(),
            stream_base_url: default_stream_base_url(),
            default_slug: default_slug_template(),
        }
    }
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            timeout: default_probe_timeout(),
            workers: None,
            progress_interval: default_progress_interval(),
        }
    }
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            max_row_items: default_max_row_items(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            target_regions: default_target_regions(),
            fetch: FetchConfig::default(),
            structured_feed: StructuredFeedConfig::default(),
            health_check: HealthCheckConfig::default(),
            playlist: PlaylistConfig::default(),
        }
    }
}

impl HealthCheckConfig {
    /// Configured pool size, or `max(4, available parallelism - 1)`
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            let cpus = std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1);
            MIN_PROBE_WORKERS.max(cpus.saturating_sub(1))
        })
    }
}

impl Config {
    /// Load configuration: defaults, then the TOML file if present, then
    /// `IPTV_AGG_` environment variables (nested keys split on `__`).
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            } else {
                debug!("Config file {} not found, using defaults", path.display());
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::extract(figment)
    }

    /// Load configuration from an in-memory TOML document layered over defaults
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string(contents));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> AppResult<Self> {
        let config: Config = figment
            .extract()
            .map_err(|e| AppError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.target_regions.is_empty() {
            return Err(AppError::configuration(
                "target_regions must name at least one region",
            ));
        }
        if self.health_check.progress_interval == 0 {
            return Err(AppError::configuration(
                "health_check.progress_interval must be greater than zero",
            ));
        }
        if self.health_check.workers == Some(0) {
            return Err(AppError::configuration(
                "health_check.workers must be greater than zero",
            ));
        }
        if !self.structured_feed.default_slug.contains(SLUG_ID_PLACEHOLDER) {
            return Err(AppError::configuration(format!(
                "structured_feed.default_slug must contain the {SLUG_ID_PLACEHOLDER} placeholder"
            )));
        }
        Ok(())
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml_string(&self) -> AppResult<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.health_check.timeout, Duration::from_secs(8));
        assert_eq!(config.fetch.timeout, Duration::from_secs(30));
        assert_eq!(config.health_check.progress_interval, 100);
        assert_eq!(config.target_regions.len(), 13);
        assert!(config.target_regions.iter().any(|r| r == "us"));
    }

    #[test]
    fn test_worker_count_has_floor() {
        let config = HealthCheckConfig::default();
        assert!(config.worker_count() >= MIN_PROBE_WORKERS);

        let fixed = HealthCheckConfig {
            workers: Some(2),
            ..HealthCheckConfig::default()
        };
        assert_eq!(fixed.worker_count(), 2);
    }

    #[test]
    fn test_toml_overrides_layer_over_defaults() {
        let config = Config::from_toml_str(
            r#"
            output_path = "out/list.m3u"
            target_regions = ["BR"]

            [health_check]
            timeout = "3s"
            workers = 16
            "#,
        )
        .unwrap();

        assert_eq!(config.output_path, PathBuf::from("out/list.m3u"));
        assert_eq!(config.target_regions, vec!["BR".to_string()]);
        assert_eq!(config.health_check.timeout, Duration::from_secs(3));
        assert_eq!(config.health_check.worker_count(), 16);
        // untouched sections keep their defaults
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.structured_feed.default_slug, DEFAULT_SLUG_TEMPLATE);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(Config::from_toml_str("target_regions = []").is_err());
        assert!(Config::from_toml_str("[health_check]\nprogress_interval = 0").is_err());
        assert!(Config::from_toml_str("[health_check]\nworkers = 0").is_err());
        assert!(Config::from_toml_str("[structured_feed]\ndefault_slug = \"static\"").is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let text = Config::default().to_toml_string().unwrap();
        let reparsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(reparsed.target_regions, Config::default().target_regions);
        assert_eq!(reparsed.health_check.timeout, Duration::from_secs(8));
    }
}
