use anyhow::{Context, Result};
use chrono::Weekday;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

/// Environment variable prefix, e.g. `EVENTIDE__CALENDAR__FIRST_DAY_OF_WEEK=Sun`.
pub const ENV_PREFIX: &str = "EVENTIDE";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: WeekConfig,
    pub logging: LoggingConfig,
}

/// Calendar conventions consumed by the relative range calculator.
///
/// Weekdays accept any spelling chrono parses (`"Mon"`, `"monday"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WeekConfig {
    pub first_day_of_week: Weekday,
    pub first_day_of_weekend: Weekday,
    pub last_day_of_weekend: Weekday,
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Mon,
            first_day_of_weekend: Weekday::Sat,
            last_day_of_weekend: Weekday::Sun,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a config builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("calendar.first_day_of_week", "Mon")?
            .set_default("calendar.first_day_of_weekend", "Sat")?
            .set_default("calendar.last_day_of_weekend", "Sun")?
            .set_default("logging.level", "debug")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()
            .context("failed to build configuration")?
            .try_deserialize::<Settings>()
            .context("failed to deserialize configuration")
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
