use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::observability::MetricsConfig;

const DEFAULT_MESSAGES_URL: &str =
    "https://owpublic.blob.core.windows.net/tech-task/messages/current-period";
const DEFAULT_REPORTS_URL: &str = "https://owpublic.blob.core.windows.net/tech-task/reports";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream messages and reports services
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Endpoint returning the messages of the current period
    pub messages_url: String,
    /// Base URL of the reports endpoint; the report id is appended
    pub reports_url: String,
    /// Timeout applied to every upstream request
    pub timeout_secs: u64,
    /// Messages whose reports are resolved at the same time
    pub report_fetch_concurrency: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            messages_url: DEFAULT_MESSAGES_URL.to_string(),
            reports_url: DEFAULT_REPORTS_URL.to_string(),
            timeout_secs: 10,
            report_fetch_concurrency: 1,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5001".to_string(),
                "http://127.0.0.1:5001".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.upstream.timeout(), Duration::from_secs(10));
        assert_eq!(config.upstream.report_fetch_concurrency, 1);
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": {"port": 9000},
            "logging": {"format": "json"},
            "upstream": {"reports_url": "http://localhost:9100/reports"}
        }))
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.upstream.reports_url, "http://localhost:9100/reports");
        assert_eq!(config.upstream.messages_url, DEFAULT_MESSAGES_URL);
    }
}
