use serde::Deserialize;
use std::env;

use skydesk_core::{CoreResult, DisplayOptions};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Origin of the flight search API, e.g. `http://127.0.0.1:8081`
    pub base_url: String,
    /// No timeout when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

fn default_locale() -> String { "en-US".into() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            utc_offset_minutes: 0,
        }
    }
}

impl DisplayConfig {
    pub fn options(&self) -> CoreResult<DisplayOptions> {
        DisplayOptions::new(self.locale.parse()?, self.utc_offset_minutes)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYDESK__UPSTREAM__BASE_URL=http://api:8081`
            .add_source(config::Environment::with_prefix("SKYDESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydesk_core::Locale;

    fn from_toml(raw: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_config_with_defaults() {
        let cfg = from_toml(
            r#"
            [server]
            port = 8080
            [upstream]
            base_url = "http://localhost:8081"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.upstream.request_timeout_secs.is_none());

        let display = cfg.display.options().unwrap();
        assert_eq!(display.locale, Locale::EnUs);
        assert_eq!(display.offset.local_minus_utc(), 0);
    }

    #[test]
    fn test_display_section() {
        let cfg = from_toml(
            r#"
            [server]
            port = 80
            [upstream]
            base_url = "http://localhost:8081"
            request_timeout_secs = 5
            [display]
            locale = "vi-VN"
            utc_offset_minutes = 420
            "#,
        )
        .unwrap();
        assert_eq!(cfg.upstream.request_timeout_secs, Some(5));
        let display = cfg.display.options().unwrap();
        assert_eq!(display.locale, Locale::ViVn);
        assert_eq!(display.offset.local_minus_utc(), 25_200);
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let display = DisplayConfig { locale: "xx".into(), utc_offset_minutes: 0 };
        assert!(display.options().is_err());
    }
}
