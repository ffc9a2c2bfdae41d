//! Error types for analysis operations

use thiserror::Error;

/// Validation errors for analysis requests
#[derive(Error, Debug)]
pub enum AnalysisValidationError {
	#[error("Query must not be empty")]
	EmptyQuery,

	#[error("Coordinates out of range: ({lat}, {lng})")]
	InvalidCoordinates { lat: f64, lng: f64 },
}

/// Errors surfaced by the analysis orchestrator
///
/// Individual provider failures are never surfaced here; they are recovered
/// locally through fallback substitution. Only input problems and genuine
/// composition defects propagate.
#[derive(Error, Debug)]
pub enum AnalysisError {
	#[error("Analysis validation failed: {0}")]
	Validation(#[from] AnalysisValidationError),

	#[error("Storage error: {0}")]
	Storage(String),

	#[error("Internal analysis failure: {reason}")]
	Internal { reason: String },
}
