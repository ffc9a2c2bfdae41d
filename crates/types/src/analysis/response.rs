//! Composed analysis result models

use crate::providers::{ElevationInfo, MarineObservation, ProviderKind, WeatherObservation};
use crate::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic classification of the merged numeric signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
	Low,
	Medium,
	High,
}

impl fmt::Display for RiskLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			RiskLevel::Low => "low",
			RiskLevel::Medium => "medium",
			RiskLevel::High => "high",
		};
		f.write_str(s)
	}
}

/// One labelled reading in the composed result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
	pub label: String,
	pub value: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub unit: Option<String>,
}

impl DataPoint {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			unit: None,
		}
	}

	pub fn with_unit(
		label: impl Into<String>,
		value: impl Into<String>,
		unit: impl Into<String>,
	) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			unit: Some(unit.into()),
		}
	}
}

/// Whether a layer is a base map or drawn on top of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
	Base,
	Overlay,
}

/// A named raster/vector layer handed to the map collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayer {
	pub id: String,
	pub name: String,
	pub kind: LayerKind,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// Attribution of one provider slot: did real data arrive, or was a
/// documented synthetic value substituted?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReport {
	pub provider: ProviderKind,
	pub fallback: bool,
}

impl SourceReport {
	pub fn live(provider: ProviderKind) -> Self {
		Self {
			provider,
			fallback: false,
		}
	}

	pub fn fallback(provider: ProviderKind) -> Self {
		Self {
			provider,
			fallback: true,
		}
	}
}

/// The orchestrator's output
///
/// Never partially typed: every field is present, with fallback markers in
/// `sources` wherever synthetic data replaced a failed provider call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
	pub query: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coordinates: Option<Coordinates>,
	pub risk_level: RiskLevel,
	pub data_points: Vec<DataPoint>,
	pub layers: Vec<MapLayer>,
	pub sources: Vec<SourceReport>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weather: Option<WeatherObservation>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub marine: Option<MarineObservation>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub elevation: Option<ElevationInfo>,
	pub notes: Vec<String>,
	pub generated_at: DateTime<Utc>,
}

impl AnalysisResult {
	/// Neutral low-risk result used when the place name cannot be resolved:
	/// no guessed location, no provider calls, explicit empty sources.
	pub fn location_not_found(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			location_name: None,
			coordinates: None,
			risk_level: RiskLevel::Low,
			data_points: Vec::new(),
			layers: Vec::new(),
			sources: Vec::new(),
			weather: None,
			marine: None,
			elevation: None,
			notes: vec!["location not found".to_string()],
			generated_at: Utc::now(),
		}
	}

	/// Providers that delivered real data
	pub fn live_sources(&self) -> Vec<ProviderKind> {
		self.sources
			.iter()
			.filter(|s| !s.fallback)
			.map(|s| s.provider)
			.collect()
	}
}
