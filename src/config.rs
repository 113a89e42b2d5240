//! Configuration loading from `config.toml`.
//!
//! Every field has a default, so the file is optional and may set only the
//! values it cares about.

use crate::domain::PricingRules;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub pricing: PricingConfig,
    pub feedback: FeedbackConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub max_workers: usize,
    /// Sessions idle longer than this are dropped.
    pub session_idle_secs: i64,
    /// Upper bound on live sessions; the least recently seen is evicted.
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            session_idle_secs: 60 * 60,
            max_sessions: 10_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./lagos_pred_model.json"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PricingConfig {
    pub rent_divisor: f64,
    /// Value fed to the model's fifth column.
    pub placeholder_feature: f64,
    pub currency_symbol: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let rules = PricingRules::default();
        Self {
            rent_divisor: rules.rent_divisor,
            placeholder_feature: 0.0,
            currency_symbol: rules.currency_symbol,
        }
    }
}

impl PricingConfig {
    pub fn rules(&self) -> PricingRules {
        PricingRules {
            rent_divisor: self.rent_divisor,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeedbackConfig {
    pub path: PathBuf,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("feedback.txt"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "apartment_pulse=info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. A missing file yields defaults;
    /// the bool reports whether the file existed.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, bool), ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok((Self::default(), false));
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((Self::from_toml(&contents)?, true))
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pricing;
        if !(p.rent_divisor.is_finite() && p.rent_divisor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pricing.rent_divisor must be a positive number, got {}",
                p.rent_divisor
            )));
        }
        if !p.placeholder_feature.is_finite() {
            return Err(ConfigError::Invalid(
                "pricing.placeholder_feature must be finite".into(),
            ));
        }
        if self.server.max_workers == 0 {
            return Err(ConfigError::Invalid("server.max_workers must be > 0".into()));
        }
        if self.server.max_sessions == 0 {
            return Err(ConfigError::Invalid("server.max_sessions must be > 0".into()));
        }
        if self.server.session_idle_secs <= 0 {
            return Err(ConfigError::Invalid(
                "server.session_idle_secs must be > 0".into(),
            ));
        }
        Ok(())
    }
}
