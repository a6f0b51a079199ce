//! Configuration loading
//!
//! Layers, lowest precedence first:
//! 1. Built-in defaults for the detected environment, plus the conventional
//!    `SERVER_HOST`, `SERVER_PORT`, `DATABASE_URL` and `REDIS_URL` variables
//! 2. `config/config.<environment>.toml`, if present
//! 3. `NUMGUARD__`-prefixed environment variables, e.g.
//!    `NUMGUARD__SERVER__PORT=9000` or `NUMGUARD__STORAGE__RECORDS=mysql`

use config::{Config, ConfigError, Environment as EnvSource, File, FileFormat};
use ng_shared::config::{AppConfig, Environment};
use std::path::Path;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "NUMGUARD";

/// Directory searched for per-environment config files
pub const CONFIG_DIR: &str = "config";

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    layer(AppConfig::from_env(), Path::new(CONFIG_DIR))
}

/// Load configuration for `environment`, reading files from `config_dir`
pub fn load_config_from(environment: Environment, config_dir: &Path) -> Result<AppConfig, ConfigError> {
    layer(AppConfig::for_environment(environment), config_dir)
}

fn layer(defaults: AppConfig, config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let environment = defaults.environment;
    let file = config_dir.join(environment.config_file());

    log::debug!("Loading configuration for {} from {}", environment, file.display());

    Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::new(&file.to_string_lossy(), FileFormat::Toml).required(false))
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
