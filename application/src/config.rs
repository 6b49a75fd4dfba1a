//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Catalog seeds configuration.
    pub catalog: Catalog,

    /// Mocked backend gateway configuration.
    pub gateway: Gateway,

    /// Log configuration.
    pub log: Log,

    /// Service configuration.
    pub service: Service,

    /// Durable slot storage configuration.
    pub storage: Storage,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Catalog seeds configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Path of the properties seed file.
    #[default(PathBuf::from("data/properties.json"))]
    pub properties: PathBuf,

    /// Path of the cities seed file.
    #[default(PathBuf::from("data/cities.json"))]
    pub cities: PathBuf,
}

/// Mocked backend gateway configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Gateway {
    /// Artificial delay of the mocked backend responses.
    #[default(time::Duration::from_secs(1))]
    #[serde(with = "humantime_serde")]
    pub delay: time::Duration,
}

impl From<Gateway> for service::infra::gateway::mock::Config {
    fn from(value: Gateway) -> Self {
        Self { delay: value.delay }
    }
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Secret code accepted as the one-time password confirming a pending
    /// registration.
    #[default("123456".to_owned())]
    pub otp_secret: String,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        Self {
            otp_secret: SecretString::from(value.otp_secret),
        }
    }
}

/// Durable slot storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Path of the file holding the stored user record.
    #[default(PathBuf::from("user.json"))]
    pub path: PathBuf,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
