//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: ProviderSettings,
	pub timeouts: TimeoutSettings,
	pub cache: CacheSettings,
	pub conversation: ConversationSettings,
	pub logging: LoggingSettings,
}

impl Settings {
	/// Socket address string the server binds to
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3002,
		}
	}
}

/// One upstream data source
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderEndpoint {
	pub endpoint: String,
	pub enabled: bool,
}

impl Default for ProviderEndpoint {
	fn default() -> Self {
		Self {
			endpoint: String::new(),
			enabled: true,
		}
	}
}

impl ProviderEndpoint {
	fn with_endpoint(endpoint: &str) -> Self {
		Self {
			endpoint: endpoint.to_string(),
			enabled: true,
		}
	}
}

/// Upstream provider endpoints
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderSettings {
	pub weather: ProviderEndpoint,
	pub marine: ProviderEndpoint,
	pub radar: ProviderEndpoint,
	pub elevation: ProviderEndpoint,
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			weather: ProviderEndpoint::with_endpoint("https://api.open-meteo.com"),
			marine: ProviderEndpoint::with_endpoint("https://marine-api.open-meteo.com"),
			radar: ProviderEndpoint::with_endpoint("https://api.rainviewer.com"),
			elevation: ProviderEndpoint::with_endpoint("https://api.open-elevation.com"),
		}
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Per-provider fan-out budget in milliseconds; a provider that has not
	/// settled by then is treated as failed and its slot falls back.
	pub per_provider_ms: u64,
	/// Transport-level request timeout for HTTP clients
	pub request_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_provider_ms: 4000,
			request_ms: 8000,
		}
	}
}

/// Analysis cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheSettings {
	/// How long a composed result stays servable
	pub ttl_secs: u64,
	/// Width of the coarse time bucket folded into the fingerprint
	pub time_bucket_secs: u64,
	/// Decimal places coordinates are rounded to in the fingerprint
	pub coordinate_decimals: usize,
}

impl Default for CacheSettings {
	fn default() -> Self {
		Self {
			ttl_secs: 300,
			time_bucket_secs: 300,
			coordinate_decimals: 3,
		}
	}
}

/// Conversation store configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConversationSettings {
	/// Sliding-window length per conversation; oldest messages drop first
	pub max_messages: usize,
}

impl Default for ConversationSettings {
	fn default() -> Self {
		Self { max_messages: 20 }
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_runnable() {
		let settings = Settings::default();
		assert_eq!(settings.server.port, 3002);
		assert!(settings.providers.weather.endpoint.starts_with("https://"));
		assert!(settings.timeouts.per_provider_ms < settings.timeouts.request_ms * 2);
		assert_eq!(settings.cache.ttl_secs, 300);
	}

	#[test]
	fn test_partial_json_fills_in_defaults() {
		let settings: Settings =
			serde_json::from_str(r#"{"server": {"port": 8080}}"#).unwrap();
		assert_eq!(settings.server.port, 8080);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert_eq!(settings.conversation.max_messages, 20);
	}
}
