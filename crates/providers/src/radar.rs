//! RainViewer precipitation-radar configuration client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use terrascope_types::{ProviderError, ProviderResult, RadarProvider, RadarSnapshot};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct WeatherMapsResponse {
	host: String,
	radar: RadarFrames,
}

#[derive(Debug, Deserialize)]
struct RadarFrames {
	past: Vec<RadarFrame>,
	#[serde(default)]
	nowcast: Vec<RadarFrame>,
}

#[derive(Debug, Deserialize)]
struct RadarFrame {
	path: String,
}

/// Client for the RainViewer weather-maps index
#[derive(Debug, Clone)]
pub struct RainViewerClient {
	client: Client,
	base_url: String,
}

impl RainViewerClient {
	pub fn new(client: Client, base_url: &str) -> Self {
		Self {
			client,
			base_url: crate::trim_base_url(base_url),
		}
	}
}

#[async_trait]
impl RadarProvider for RainViewerClient {
	async fn radar_snapshot(&self) -> ProviderResult<RadarSnapshot> {
		debug!("fetching radar frame index");

		let response = self
			.client
			.get(format!("{}/public/weather-maps.json", self.base_url))
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(ProviderError::from_status(status.as_u16()));
		}

		let body: WeatherMapsResponse = response
			.json()
			.await
			.map_err(|e| ProviderError::invalid(format!("weather-maps body: {}", e)))?;

		let latest = body
			.radar
			.past
			.last()
			.ok_or_else(|| ProviderError::invalid("no past radar frames"))?;

		Ok(RadarSnapshot {
			host: body.host.clone(),
			latest_frame_path: latest.path.clone(),
			frame_count: body.radar.past.len() + body.radar.nowcast.len(),
		})
	}

	fn name(&self) -> &str {
		"rainviewer"
	}
}
