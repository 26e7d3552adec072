use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::Catalog;
use crate::models::{ProfileRecord, ScoringParams};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Replaces the built-in catalog when present
    #[serde(default)]
    pub catalog: Option<Vec<ProfileRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_base_score")]
    pub base_score: f64,
    #[serde(default = "default_style_bonus")]
    pub style_bonus: f64,
    #[serde(default = "default_jitter")]
    pub jitter: f64,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            style_bonus: default_style_bonus(),
            jitter: default_jitter(),
            max_score: default_max_score(),
        }
    }
}

fn default_base_score() -> f64 { 0.60 }
fn default_style_bonus() -> f64 { 0.30 }
fn default_jitter() -> f64 { 0.05 }
fn default_max_score() -> f64 { 0.99 }

impl ScoringSettings {
    pub fn params(&self) -> ScoringParams {
        ScoringParams {
            base_score: self.base_score,
            style_bonus: self.style_bonus,
            jitter: self.jitter,
            max_score: self.max_score,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ARCH_INTENT__)
    /// 5. PORT, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        let settings = apply_port_override(settings, std::env::var("PORT").ok())?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject scoring parameters and catalogs the matcher cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        let values = [
            ("base_score", s.base_score),
            ("style_bonus", s.style_bonus),
            ("jitter", s.jitter),
            ("max_score", s.max_score),
        ];

        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        if s.base_score > s.max_score {
            return Err(ConfigError::Message(format!(
                "scoring.base_score ({}) must not exceed scoring.max_score ({})",
                s.base_score, s.max_score
            )));
        }

        self.build_catalog()?;
        Ok(())
    }

    /// Catalog from configuration, or the built-in one
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog {
            Some(profiles) => Catalog::new(profiles.clone())
                .map_err(|e| ConfigError::Message(format!("catalog: {}", e))),
            None => Ok(Catalog::builtin()),
        }
    }
}

/// Environment variables prefixed with ARCH_INTENT__
/// e.g., ARCH_INTENT__SERVER__PORT -> server.port
fn environment() -> Environment {
    Environment::with_prefix("ARCH_INTENT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// A bare PORT variable wins over every other source for the listening port
fn apply_port_override(settings: Config, port: Option<String>) -> Result<Config, ConfigError> {
    match port {
        Some(port) => Config::builder()
            .add_source(settings)
            .set_override("server.port", port)?
            .build(),
        None => Ok(settings),
    }
}
