//! Open-Meteo current-weather client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use terrascope_types::{
	Coordinates, ProviderError, ProviderResult, WeatherObservation, WeatherProvider,
};
use tracing::debug;

/// Current-conditions fields requested from the forecast endpoint
const CURRENT_FIELDS: &str =
	"temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation_probability,weather_code";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
	current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
	temperature_2m: f64,
	relative_humidity_2m: f64,
	wind_speed_10m: f64,
	#[serde(default)]
	precipitation_probability: Option<f64>,
	weather_code: i32,
}

/// Human-readable label for a WMO weather interpretation code
pub fn describe_weather_code(code: i32) -> &'static str {
	match code {
		0 => "Clear sky",
		1 => "Mainly clear",
		2 => "Partly cloudy",
		3 => "Overcast",
		45 | 48 => "Fog",
		51 | 53 | 55 => "Drizzle",
		61 | 63 | 65 => "Rain",
		66 | 67 => "Freezing rain",
		71 | 73 | 75 | 77 => "Snow",
		80 | 81 | 82 => "Rain showers",
		85 | 86 => "Snow showers",
		95 => "Thunderstorm",
		96 | 99 => "Thunderstorm with hail",
		_ => "Unknown",
	}
}

/// Client for the Open-Meteo forecast API
#[derive(Debug, Clone)]
pub struct OpenMeteoWeatherClient {
	client: Client,
	base_url: String,
}

impl OpenMeteoWeatherClient {
	pub fn new(client: Client, base_url: &str) -> Self {
		Self {
			client,
			base_url: crate::trim_base_url(base_url),
		}
	}
}

#[async_trait]
impl WeatherProvider for OpenMeteoWeatherClient {
	async fn current_weather(&self, coords: Coordinates) -> ProviderResult<WeatherObservation> {
		debug!(%coords, "fetching current weather");

		let response = self
			.client
			.get(format!("{}/v1/forecast", self.base_url))
			.query(&[
				("latitude", coords.lat.to_string()),
				("longitude", coords.lng.to_string()),
				("current", CURRENT_FIELDS.to_string()),
				("timezone", "auto".to_string()),
			])
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(ProviderError::from_status(status.as_u16()));
		}

		let body: ForecastResponse = response
			.json()
			.await
			.map_err(|e| ProviderError::invalid(format!("forecast body: {}", e)))?;

		let current = body.current;
		Ok(WeatherObservation {
			temperature_c: current.temperature_2m,
			humidity_pct: current.relative_humidity_2m,
			wind_speed_kmh: current.wind_speed_10m,
			precipitation_probability_pct: current.precipitation_probability.unwrap_or(0.0),
			weather_code: current.weather_code,
			description: describe_weather_code(current.weather_code).to_string(),
		})
	}

	fn name(&self) -> &str {
		"open-meteo"
	}
}
