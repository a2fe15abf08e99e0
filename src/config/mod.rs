mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{
    DEFAULT_PORT, LoggingSettings, MAX_POLL_INTERVAL_MS, PublisherSettings, Settings,
    SubscriberSettings,
};

/// Prefix of the environment variables read by `load_config`,
/// e.g. `ZMQBUS_SUBSCRIBER__TOPIC`.
pub const ENV_PREFIX: &str = "ZMQBUS";

/// Loads the configuration from `config/default` and environment variables.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from("config/default")
}

/// Loads the configuration from the given file (any extension the `config`
/// crate understands, the file may be absent) and environment variables.
/// Values missing from both are filled from `Settings::default()`.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(partial.merge_with_defaults())
}
