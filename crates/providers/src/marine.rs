//! Open-Meteo marine (sea-state) client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use terrascope_types::{
	Coordinates, MarineObservation, MarineProvider, ProviderError, ProviderResult,
};
use tracing::debug;

const HOURLY_FIELDS: &str = "wave_height,wave_direction,wave_period,sea_surface_temperature";

#[derive(Debug, Deserialize)]
struct MarineResponse {
	hourly: MarineHourly,
}

/// Parallel hourly series; the first sample is the nearest-term forecast
#[derive(Debug, Deserialize)]
struct MarineHourly {
	wave_height: Vec<f64>,
	wave_direction: Vec<f64>,
	wave_period: Vec<f64>,
	#[serde(default)]
	sea_surface_temperature: Option<Vec<f64>>,
}

/// Client for the Open-Meteo marine API
#[derive(Debug, Clone)]
pub struct OpenMeteoMarineClient {
	client: Client,
	base_url: String,
}

impl OpenMeteoMarineClient {
	pub fn new(client: Client, base_url: &str) -> Self {
		Self {
			client,
			base_url: crate::trim_base_url(base_url),
		}
	}
}

#[async_trait]
impl MarineProvider for OpenMeteoMarineClient {
	async fn marine(&self, coords: Coordinates) -> ProviderResult<MarineObservation> {
		debug!(%coords, "fetching marine conditions");

		let response = self
			.client
			.get(format!("{}/v1/marine", self.base_url))
			.query(&[
				("latitude", coords.lat.to_string()),
				("longitude", coords.lng.to_string()),
				("hourly", HOURLY_FIELDS.to_string()),
				("timezone", "auto".to_string()),
			])
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(ProviderError::from_status(status.as_u16()));
		}

		let body: MarineResponse = response
			.json()
			.await
			.map_err(|e| ProviderError::invalid(format!("marine body: {}", e)))?;

		let hourly = body.hourly;
		let wave_height = *hourly
			.wave_height
			.first()
			.ok_or_else(|| ProviderError::invalid("empty wave_height series"))?;
		let wave_direction = hourly.wave_direction.first().copied().unwrap_or(0.0);
		let wave_period = hourly.wave_period.first().copied().unwrap_or(0.0);
		let sea_surface_temperature_c = hourly
			.sea_surface_temperature
			.as_ref()
			.and_then(|series| series.first().copied());

		Ok(MarineObservation {
			wave_height_m: wave_height,
			wave_direction_deg: wave_direction,
			wave_period_s: wave_period,
			sea_surface_temperature_c,
		})
	}

	fn name(&self) -> &str {
		"open-meteo-marine"
	}
}
