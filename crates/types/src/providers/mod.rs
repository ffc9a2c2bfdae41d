//! Provider contracts and observation models
//!
//! One thin client per external data source implements the matching trait.
//! Clients signal typed failures and never substitute synthetic values
//! themselves; fallback substitution is the orchestrator's job so that the
//! real-vs-synthetic determination lives in one place.

pub mod errors;
pub mod traits;

pub use errors::{ProviderError, ProviderResult};
pub use traits::{ImageryProvider, MarineProvider, RadarProvider, WeatherProvider};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The external data sources the orchestrator fans out to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
	Weather,
	Marine,
	Radar,
	Elevation,
}

impl ProviderKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ProviderKind::Weather => "weather",
			ProviderKind::Marine => "marine",
			ProviderKind::Radar => "radar",
			ProviderKind::Elevation => "elevation",
		}
	}
}

impl fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Current surface weather at a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
	pub temperature_c: f64,
	pub humidity_pct: f64,
	pub wind_speed_kmh: f64,
	pub precipitation_probability_pct: f64,
	/// WMO weather interpretation code
	pub weather_code: i32,
	pub description: String,
}

/// Sea state near a coastal point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineObservation {
	pub wave_height_m: f64,
	pub wave_direction_deg: f64,
	pub wave_period_s: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sea_surface_temperature_c: Option<f64>,
}

/// Latest radar mosaic frame advertised by the tile provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSnapshot {
	pub host: String,
	pub latest_frame_path: String,
	pub frame_count: usize,
}

impl RadarSnapshot {
	/// XYZ tile-URL template for the map collaborator
	pub fn tile_url_template(&self) -> String {
		format!(
			"{}{}/256/{{z}}/{{x}}/{{y}}/2/1_1.png",
			self.host, self.latest_frame_path
		)
	}
}

/// Terrain elevation at a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationInfo {
	pub elevation_m: f64,
}
