//! Runtime configuration for the engine binary.
//!
//! Values come from `CONSENSUS__*` environment variables (a `.env` file is
//! honoured). Every value has a default, so an empty environment is a valid
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use consensus_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init().expect("Failed to install logging");
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Reads the environment, `__` separating nesting levels:
    ///
    /// - `CONSENSUS__LOGGING__LEVEL=debug`
    /// - `CONSENSUS__LOGGING__FORMAT=json`
    /// - `CONSENSUS__ENGINE__STRICT_COMPLETENESS=true`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONSENSUS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks values that parse but cannot be used, such as a malformed log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}
