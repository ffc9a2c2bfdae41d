//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the optional config file plus `TERRASCOPE_*`
/// environment overrides (e.g. `TERRASCOPE_SERVER__PORT=8080`).
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("TERRASCOPE").separator("__"))
		.build()?;

	s.try_deserialize()
}
