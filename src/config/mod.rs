mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{HubSettings, LogSettings, Settings};

/// Loads the configuration from the default file and environment variables.
///
/// Values can be given partially; anything missing falls back to its default.
/// Environment variables use `__` as the section separator, e.g.
/// `HUB__CHANNEL_CAPACITY=16` or `LOG__LEVEL=debug`.
pub fn load_config() -> Result<Settings, ConfigError> {
    // Pick up a local .env before reading the environment source.
    dotenvy::dotenv().ok();

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("__"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    Ok(Settings::merged(partial))
}

#[cfg(test)]
mod tests;
