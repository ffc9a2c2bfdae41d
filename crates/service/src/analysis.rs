//! Analysis orchestration
//!
//! One request flows through: validation, fingerprint cache check, location
//! resolution, concurrent provider fan-out under a per-provider budget,
//! fallback substitution for failed slots, risk scoring and composition.
//! Cache trouble degrades to a live computation and is never surfaced.

use crate::{fallback, fingerprint, risk};
use chrono::{Datelike, Utc};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use terrascope_config::Settings;
use terrascope_providers::ProviderRegistry;
use terrascope_storage::{AnalysisCache, Storage};
use terrascope_types::{
	resolve, AnalysisError, AnalysisRequest, AnalysisResult, Coordinates, DataPoint, ElevationInfo,
	LayerKind, MapLayer, MarineObservation, PlaceKind, ProviderError, ProviderKind,
	ProviderResult, RadarSnapshot, ResolvedLocation, RiskLevel, SourceReport, WeatherObservation,
};
use tracing::{debug, info, warn};

const STREET_TILES: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const SATELLITE_TILES: &str =
	"https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

/// Query tokens that mark a request as sea-facing. Matched against whole
/// tokens, so "seat" does not trigger "sea".
const MARINE_KEYWORDS: &[&str] = &[
	"fish", "fishing", "sea", "beach", "boat", "boating", "surf", "surfing", "swim", "swimming",
	"coast", "coastal", "marine", "wave", "waves", "harbour", "port", "shore",
];

/// Composes one environmental analysis per request
pub struct AnalysisService {
	providers: ProviderRegistry,
	storage: Arc<dyn Storage>,
	per_provider_timeout: Duration,
	cache_ttl: Duration,
	time_bucket_secs: u64,
	coordinate_decimals: usize,
}

impl AnalysisService {
	pub fn new(providers: ProviderRegistry, storage: Arc<dyn Storage>, settings: &Settings) -> Self {
		Self {
			providers,
			storage,
			per_provider_timeout: Duration::from_millis(settings.timeouts.per_provider_ms),
			cache_ttl: Duration::from_secs(settings.cache.ttl_secs),
			time_bucket_secs: settings.cache.time_bucket_secs,
			coordinate_decimals: settings.cache.coordinate_decimals,
		}
	}

	/// Run the full pipeline for one request
	pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
		request.validate()?;

		let now = Utc::now();
		let fingerprint = fingerprint::fingerprint(
			&request.query,
			request.coordinates,
			self.coordinate_decimals,
			self.time_bucket_secs,
			now,
		);

		match self.storage.get_analysis(&fingerprint).await {
			Ok(Some(cached)) => {
				debug!(fingerprint = %fingerprint, "analysis cache hit");
				return Ok(cached);
			},
			Ok(None) => {},
			Err(error) => {
				warn!(error = %error, "analysis cache read failed, computing live");
			},
		}

		let (coordinates, location) = match request.coordinates {
			Some(coords) => (coords, None),
			None => {
				let resolved = resolve(&request.query);
				if !resolved.found {
					info!(query = %request.query, "no gazetteer match for query");
					let result = AnalysisResult::location_not_found(&request.query);
					self.cache_result(fingerprint, &result).await;
					return Ok(result);
				}
				let coords = resolved.coordinates.ok_or_else(|| AnalysisError::Internal {
					reason: "resolved location carries no coordinates".to_string(),
				})?;
				(coords, Some(resolved))
			},
		};

		let want_marine = marine_relevant(&request.query, location.as_ref());
		let budget = self.per_provider_timeout;

		let (weather, marine, radar, elevation) = tokio::join!(
			slot(budget, self.providers.weather.current_weather(coordinates)),
			async {
				if want_marine {
					Some(slot(budget, self.providers.marine.marine(coordinates)).await)
				} else {
					None
				}
			},
			slot(budget, self.providers.radar.radar_snapshot()),
			slot(budget, self.providers.imagery.elevation(coordinates)),
		);

		let month = now.month();
		let mut sources = Vec::new();
		let mut notes = Vec::new();

		let weather = match weather {
			Ok(observation) => {
				sources.push(SourceReport::live(ProviderKind::Weather));
				observation
			},
			Err(error) => {
				warn!(provider = %ProviderKind::Weather, error = %error, "provider failed, substituting fallback");
				sources.push(SourceReport::fallback(ProviderKind::Weather));
				notes.push("weather unavailable, seasonal averages shown".to_string());
				fallback::seasonal_weather(month)
			},
		};

		let marine = match marine {
			Some(Ok(observation)) => {
				sources.push(SourceReport::live(ProviderKind::Marine));
				Some(observation)
			},
			Some(Err(error)) => {
				warn!(provider = %ProviderKind::Marine, error = %error, "provider failed, substituting fallback");
				sources.push(SourceReport::fallback(ProviderKind::Marine));
				notes.push("sea state unavailable, seasonal averages shown".to_string());
				Some(fallback::seasonal_marine(month))
			},
			None => None,
		};

		// Radar has no synthetic stand-in; a failed slot just drops the
		// overlay layer.
		let radar = match radar {
			Ok(snapshot) => {
				sources.push(SourceReport::live(ProviderKind::Radar));
				Some(snapshot)
			},
			Err(error) => {
				warn!(provider = %ProviderKind::Radar, error = %error, "provider failed, omitting radar overlay");
				sources.push(SourceReport::fallback(ProviderKind::Radar));
				notes.push("precipitation radar unavailable".to_string());
				None
			},
		};

		let elevation = match elevation {
			Ok(info) => {
				sources.push(SourceReport::live(ProviderKind::Elevation));
				info
			},
			Err(error) => {
				warn!(provider = %ProviderKind::Elevation, error = %error, "provider failed, substituting fallback");
				sources.push(SourceReport::fallback(ProviderKind::Elevation));
				notes.push("elevation unavailable, coastal-plain estimate shown".to_string());
				fallback::default_elevation()
			},
		};

		let risk_level = risk::classify(&risk::RiskSignals {
			wave_height_m: marine.as_ref().map(|m| m.wave_height_m).unwrap_or(0.0),
			wind_speed_kmh: weather.wind_speed_kmh,
			precipitation_probability_pct: weather.precipitation_probability_pct,
		});

		let result = AnalysisResult {
			query: request.query,
			location_name: location.as_ref().and_then(|l| l.matched_name.clone()),
			coordinates: Some(coordinates),
			risk_level,
			data_points: compose_data_points(&weather, marine.as_ref(), &elevation, risk_level),
			layers: compose_layers(radar.as_ref()),
			sources,
			weather: Some(weather),
			marine,
			elevation: Some(elevation),
			notes,
			generated_at: now,
		};

		self.cache_result(fingerprint, &result).await;
		Ok(result)
	}

	async fn cache_result(&self, fingerprint: String, result: &AnalysisResult) {
		if let Err(error) = self
			.storage
			.put_analysis(fingerprint, result.clone(), self.cache_ttl)
			.await
		{
			warn!(error = %error, "analysis cache write failed");
		}
	}
}

/// Enforce the per-provider budget on one fan-out slot
async fn slot<T, F>(budget: Duration, call: F) -> ProviderResult<T>
where
	F: Future<Output = ProviderResult<T>>,
{
	match tokio::time::timeout(budget, call).await {
		Ok(result) => result,
		Err(_) => Err(ProviderError::Timeout {
			timeout_ms: budget.as_millis() as u64,
		}),
	}
}

/// A request is sea-facing when the resolved place is a beach or the query
/// mentions a marine activity.
fn marine_relevant(query: &str, location: Option<&ResolvedLocation>) -> bool {
	if matches!(location.and_then(|l| l.kind), Some(PlaceKind::Beach)) {
		return true;
	}
	query
		.to_lowercase()
		.split(|c: char| !c.is_alphanumeric())
		.any(|token| MARINE_KEYWORDS.contains(&token))
}

fn compose_data_points(
	weather: &WeatherObservation,
	marine: Option<&MarineObservation>,
	elevation: &ElevationInfo,
	risk_level: RiskLevel,
) -> Vec<DataPoint> {
	let mut points = vec![
		DataPoint::with_unit("Temperature", format!("{:.1}", weather.temperature_c), "°C"),
		DataPoint::with_unit("Humidity", format!("{:.0}", weather.humidity_pct), "%"),
		DataPoint::with_unit("Wind Speed", format!("{:.1}", weather.wind_speed_kmh), "km/h"),
		DataPoint::with_unit(
			"Precipitation Chance",
			format!("{:.0}", weather.precipitation_probability_pct),
			"%",
		),
	];

	if let Some(marine) = marine {
		points.push(DataPoint::with_unit(
			"Wave Height",
			format!("{:.2}", marine.wave_height_m),
			"m",
		));
		points.push(DataPoint::with_unit(
			"Wave Period",
			format!("{:.1}", marine.wave_period_s),
			"s",
		));
	}

	points.push(DataPoint::with_unit(
		"Elevation",
		format!("{:.0}", elevation.elevation_m),
		"m",
	));
	points.push(DataPoint::new("Risk Level", risk_level.to_string()));
	points
}

fn compose_layers(radar: Option<&RadarSnapshot>) -> Vec<MapLayer> {
	let mut layers = vec![
		MapLayer {
			id: "streets".to_string(),
			name: "Streets".to_string(),
			kind: LayerKind::Base,
			url: Some(STREET_TILES.to_string()),
		},
		MapLayer {
			id: "satellite".to_string(),
			name: "Satellite".to_string(),
			kind: LayerKind::Base,
			url: Some(SATELLITE_TILES.to_string()),
		},
	];

	if let Some(snapshot) = radar {
		layers.push(MapLayer {
			id: "radar".to_string(),
			name: "Precipitation Radar".to_string(),
			kind: LayerKind::Overlay,
			url: Some(snapshot.tile_url_template()),
		});
	}

	layers
}
