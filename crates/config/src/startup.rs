//! Startup summary logging

use crate::Settings;
use tracing::info;

/// Log the effective configuration once at boot, endpoints included, so a
/// misconfigured deployment is visible in the first screen of output.
pub fn log_startup_summary(settings: &Settings) {
	info!(
		host = %settings.server.host,
		port = settings.server.port,
		"starting terrascope aggregator"
	);
	for (name, provider) in [
		("weather", &settings.providers.weather),
		("marine", &settings.providers.marine),
		("radar", &settings.providers.radar),
		("elevation", &settings.providers.elevation),
	] {
		info!(
			provider = name,
			endpoint = %provider.endpoint,
			enabled = provider.enabled,
			"provider configured"
		);
	}
	info!(
		cache_ttl_secs = settings.cache.ttl_secs,
		per_provider_timeout_ms = settings.timeouts.per_provider_ms,
		conversation_window = settings.conversation.max_messages,
		"runtime limits"
	);
}
