//! Terrascope Providers
//!
//! One thin client per external data source. Every client issues a single
//! outbound call with an explicit endpoint/query contract and signals a
//! typed `ProviderError` on any non-success response or unexpected shape.
//! Fallback substitution never happens here; that is the orchestrator's
//! responsibility.

pub mod elevation;
pub mod marine;
pub mod radar;
pub mod weather;

pub use elevation::OpenElevationClient;
pub use marine::OpenMeteoMarineClient;
pub use radar::RainViewerClient;
pub use weather::OpenMeteoWeatherClient;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use terrascope_config::Settings;
use terrascope_types::{
	ImageryProvider, MarineProvider, ProviderError, ProviderResult, RadarProvider,
	WeatherProvider,
};

/// Build the shared HTTP client with default headers and the configured
/// transport timeout.
pub fn build_http_client(request_timeout_ms: u64) -> ProviderResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert("Accept", HeaderValue::from_static("application/json"));
	headers.insert(
		"User-Agent",
		HeaderValue::from_static("Terrascope-Aggregator/1.0"),
	);

	let client = Client::builder()
		.default_headers(headers)
		.timeout(Duration::from_millis(request_timeout_ms))
		.build()
		.map_err(ProviderError::Http)?;

	Ok(client)
}

/// The set of provider clients the orchestrator fans out to
///
/// Held behind trait objects so tests can swap in configurable mocks.
#[derive(Clone)]
pub struct ProviderRegistry {
	pub weather: Arc<dyn WeatherProvider>,
	pub marine: Arc<dyn MarineProvider>,
	pub radar: Arc<dyn RadarProvider>,
	pub imagery: Arc<dyn ImageryProvider>,
}

impl ProviderRegistry {
	pub fn new(
		weather: Arc<dyn WeatherProvider>,
		marine: Arc<dyn MarineProvider>,
		radar: Arc<dyn RadarProvider>,
		imagery: Arc<dyn ImageryProvider>,
	) -> Self {
		Self {
			weather,
			marine,
			radar,
			imagery,
		}
	}

	/// Wire up the real clients from configuration, sharing one pooled
	/// HTTP client across all of them.
	pub fn from_settings(settings: &Settings) -> ProviderResult<Self> {
		let client = build_http_client(settings.timeouts.request_ms)?;
		Ok(Self {
			weather: Arc::new(OpenMeteoWeatherClient::new(
				client.clone(),
				&settings.providers.weather.endpoint,
			)),
			marine: Arc::new(OpenMeteoMarineClient::new(
				client.clone(),
				&settings.providers.marine.endpoint,
			)),
			radar: Arc::new(RainViewerClient::new(
				client.clone(),
				&settings.providers.radar.endpoint,
			)),
			imagery: Arc::new(OpenElevationClient::new(
				client,
				&settings.providers.elevation.endpoint,
			)),
		})
	}
}

pub(crate) fn trim_base_url(base_url: &str) -> String {
	base_url.trim_end_matches('/').to_string()
}
