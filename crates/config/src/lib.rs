//! Terrascope Config
//!
//! Settings structures and loading for the aggregator. Every field carries
//! a serde default so a missing config file still yields a runnable
//! development configuration; a `config/config.{toml,json,yaml}` file and
//! `TERRASCOPE_*` environment variables override the defaults.

pub mod loader;
pub mod settings;
pub mod startup;

pub use loader::load_config;
pub use settings::{
	CacheSettings, ConversationSettings, LoggingSettings, ProviderEndpoint, ProviderSettings,
	ServerSettings, Settings, TimeoutSettings,
};
pub use startup::log_startup_summary;
