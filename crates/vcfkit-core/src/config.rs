use std::path::Path;

use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub phone: PhoneConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneConfig {
    /// Best-effort formatting of displayed phone numbers.
    pub format: bool,
    /// ISO 3166 region used for numbers without a country code (e.g. "US").
    pub region: Option<String>,
}

impl PhoneConfig {
    /// ## Summary
    /// Returns the configured region, ignoring an empty string.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Fold generated lines longer than 75 octets.
    pub fold_lines: bool,
}

impl Settings {
    /// ## Summary
    /// Loads settings from defaults, an optional TOML file and `VCFKIT__*`
    /// environment variables. Environment variables take precedence.
    ///
    /// When `path` is `None` the file `vcfkit.toml` in the working directory
    /// is used if it exists.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating a setting fails.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("phone.format", true)?
            .set_default("output.fold_lines", true)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("VCFKIT")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> CoreResult<()> {
        if let Some(region) = self.phone.region()
            && !(region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Err(CoreError::InvalidSetting {
                key: "phone.region",
                reason: format!("expected a two-letter region code, got {region:?}"),
            });
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, the config file and the environment.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(path)?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
