//! Mock provider clients for end-to-end tests
//!
//! Each mock tracks how often it was called, can be told to fail, and can
//! delay its response past the fan-out budget to exercise timeout handling.
//! Clones share their call counter, so tests keep a handle and assert on it
//! after driving the server.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use terrascope_aggregator::{
	Coordinates, ElevationInfo, ImageryProvider, MarineObservation, MarineProvider,
	ProviderError, ProviderRegistry, ProviderResult, RadarProvider, RadarSnapshot,
	WeatherObservation, WeatherProvider,
};

pub fn calm_weather() -> WeatherObservation {
	WeatherObservation {
		temperature_c: 30.0,
		humidity_pct: 72.0,
		wind_speed_kmh: 10.0,
		precipitation_probability_pct: 10.0,
		weather_code: 1,
		description: "Mainly clear".to_string(),
	}
}

pub fn calm_marine() -> MarineObservation {
	MarineObservation {
		wave_height_m: 0.4,
		wave_direction_deg: 110.0,
		wave_period_s: 6.0,
		sea_surface_temperature_c: Some(29.0),
	}
}

/// Moderate sea state: over the medium threshold, under the high one
pub fn choppy_marine() -> MarineObservation {
	MarineObservation {
		wave_height_m: 1.2,
		wave_direction_deg: 130.0,
		wave_period_s: 7.5,
		sea_surface_temperature_c: Some(28.5),
	}
}

pub fn radar_snapshot() -> RadarSnapshot {
	RadarSnapshot {
		host: "https://tilecache.rainviewer.com".to_string(),
		latest_frame_path: "/v2/radar/1700000000".to_string(),
		frame_count: 12,
	}
}

macro_rules! mock_provider {
	($name:ident, $value:ty) => {
		#[derive(Debug, Clone)]
		pub struct $name {
			value: $value,
			should_fail: bool,
			delay_ms: u64,
			calls: Arc<AtomicUsize>,
		}

		impl $name {
			pub fn returning(value: $value) -> Self {
				Self {
					value,
					should_fail: false,
					delay_ms: 0,
					calls: Arc::new(AtomicUsize::new(0)),
				}
			}

			pub fn failing(value: $value) -> Self {
				Self {
					should_fail: true,
					..Self::returning(value)
				}
			}

			pub fn slow(value: $value, delay_ms: u64) -> Self {
				Self {
					delay_ms,
					..Self::returning(value)
				}
			}

			pub fn call_count(&self) -> usize {
				self.calls.load(Ordering::Relaxed)
			}

			async fn answer(&self) -> ProviderResult<$value> {
				self.calls.fetch_add(1, Ordering::Relaxed);
				if self.delay_ms > 0 {
					tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
				}
				if self.should_fail {
					return Err(ProviderError::from_status(503));
				}
				Ok(self.value.clone())
			}
		}
	};
}

mock_provider!(MockWeather, WeatherObservation);
mock_provider!(MockMarine, MarineObservation);
mock_provider!(MockRadar, RadarSnapshot);
mock_provider!(MockElevation, ElevationInfo);

#[async_trait]
impl WeatherProvider for MockWeather {
	async fn current_weather(&self, _: Coordinates) -> ProviderResult<WeatherObservation> {
		self.answer().await
	}

	fn name(&self) -> &str {
		"mock-weather"
	}
}

#[async_trait]
impl MarineProvider for MockMarine {
	async fn marine(&self, _: Coordinates) -> ProviderResult<MarineObservation> {
		self.answer().await
	}

	fn name(&self) -> &str {
		"mock-marine"
	}
}

#[async_trait]
impl RadarProvider for MockRadar {
	async fn radar_snapshot(&self) -> ProviderResult<RadarSnapshot> {
		self.answer().await
	}

	fn name(&self) -> &str {
		"mock-radar"
	}
}

#[async_trait]
impl ImageryProvider for MockElevation {
	async fn elevation(&self, _: Coordinates) -> ProviderResult<ElevationInfo> {
		self.answer().await
	}

	fn name(&self) -> &str {
		"mock-elevation"
	}
}

/// The four mocks plus the registry handed to the builder; the set keeps
/// clones so tests can read call counts afterwards.
#[derive(Debug, Clone)]
pub struct MockProviderSet {
	pub weather: MockWeather,
	pub marine: MockMarine,
	pub radar: MockRadar,
	pub elevation: MockElevation,
}

impl MockProviderSet {
	/// All providers healthy, returning calm conditions
	pub fn calm() -> Self {
		Self {
			weather: MockWeather::returning(calm_weather()),
			marine: MockMarine::returning(calm_marine()),
			radar: MockRadar::returning(radar_snapshot()),
			elevation: MockElevation::returning(ElevationInfo { elevation_m: 8.0 }),
		}
	}

	/// Calm weather with a moderately rough sea
	pub fn choppy() -> Self {
		Self {
			marine: MockMarine::returning(choppy_marine()),
			..Self::calm()
		}
	}

	/// Every provider answers 503
	pub fn failing() -> Self {
		Self {
			weather: MockWeather::failing(calm_weather()),
			marine: MockMarine::failing(calm_marine()),
			radar: MockRadar::failing(radar_snapshot()),
			elevation: MockElevation::failing(ElevationInfo { elevation_m: 8.0 }),
		}
	}

	pub fn registry(&self) -> ProviderRegistry {
		ProviderRegistry::new(
			Arc::new(self.weather.clone()),
			Arc::new(self.marine.clone()),
			Arc::new(self.radar.clone()),
			Arc::new(self.elevation.clone()),
		)
	}
}
