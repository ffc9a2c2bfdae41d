use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use terrascope_types::{AnalysisError, AnalysisRequest, AnalysisResult};

/// POST /api/v1/analyze - Run one environmental analysis
pub async fn post_analyze(
	State(state): State<AppState>,
	Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorResponse>)> {
	info!(query = %request.query, has_coordinates = request.coordinates.is_some(), "received analysis request");

	let result = state
		.analysis_service
		.analyze(request)
		.await
		.map_err(|error| match error {
			AnalysisError::Validation(e) => (
				StatusCode::BAD_REQUEST,
				Json(ErrorResponse::new("VALIDATION_ERROR", e.to_string())),
			),
			AnalysisError::Storage(e) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("STORAGE_ERROR", e)),
			),
			AnalysisError::Internal { reason } => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("ANALYSIS_ERROR", reason)),
			),
		})?;

	info!(
		risk = %result.risk_level,
		live_sources = result.live_sources().len(),
		"returning analysis result"
	);
	Ok(Json(result))
}
