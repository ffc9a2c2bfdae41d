//! Open-Elevation terrain lookup client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use terrascope_types::{
	Coordinates, ElevationInfo, ImageryProvider, ProviderError, ProviderResult,
};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ElevationResponse {
	results: Vec<ElevationRow>,
}

#[derive(Debug, Deserialize)]
struct ElevationRow {
	elevation: f64,
}

/// Client for the Open-Elevation lookup API
#[derive(Debug, Clone)]
pub struct OpenElevationClient {
	client: Client,
	base_url: String,
}

impl OpenElevationClient {
	pub fn new(client: Client, base_url: &str) -> Self {
		Self {
			client,
			base_url: crate::trim_base_url(base_url),
		}
	}
}

#[async_trait]
impl ImageryProvider for OpenElevationClient {
	async fn elevation(&self, coords: Coordinates) -> ProviderResult<ElevationInfo> {
		debug!(%coords, "fetching elevation");

		let response = self
			.client
			.get(format!("{}/api/v1/lookup", self.base_url))
			.query(&[("locations", format!("{},{}", coords.lat, coords.lng))])
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(ProviderError::from_status(status.as_u16()));
		}

		let body: ElevationResponse = response
			.json()
			.await
			.map_err(|e| ProviderError::invalid(format!("elevation body: {}", e)))?;

		let row = body
			.results
			.first()
			.ok_or_else(|| ProviderError::invalid("empty elevation results"))?;

		Ok(ElevationInfo {
			elevation_m: row.elevation,
		})
	}

	fn name(&self) -> &str {
		"open-elevation"
	}
}
