//! Analysis request model

use super::errors::AnalysisValidationError;
use crate::Coordinates;
use serde::{Deserialize, Serialize};

/// A natural-language question about a geographic point
///
/// Coordinates are optional; when absent the orchestrator resolves them
/// from the query text through the gazetteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
	pub query: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub coordinates: Option<Coordinates>,
}

impl AnalysisRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			coordinates: None,
		}
	}

	pub fn with_coordinates(query: impl Into<String>, coords: Coordinates) -> Self {
		Self {
			query: query.into(),
			coordinates: Some(coords),
		}
	}

	pub fn validate(&self) -> Result<(), AnalysisValidationError> {
		if self.query.trim().is_empty() {
			return Err(AnalysisValidationError::EmptyQuery);
		}
		if let Some(coords) = &self.coordinates {
			if !coords.is_valid() {
				return Err(AnalysisValidationError::InvalidCoordinates {
					lat: coords.lat,
					lng: coords.lng,
				});
			}
		}
		Ok(())
	}
}
