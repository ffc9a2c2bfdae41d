use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;
use terrascope_storage::Storage;
use terrascope_types::locations::gazetteer;

/// Health check endpoint
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
	pub status: String,
	pub storage_healthy: bool,
	pub cached_analyses: usize,
	pub conversations: usize,
}

/// GET /ready - Readiness probe with storage checks
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let storage_healthy = state.storage.health_check().await.unwrap_or(false);
	let stats = state.storage.stats().await.unwrap_or_default();

	let status = if storage_healthy { "ready" } else { "degraded" };
	let code = if storage_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};

	let body = ReadinessResponse {
		status: status.to_string(),
		storage_healthy,
		cached_analyses: stats.active_cached,
		conversations: stats.total_conversations,
	};
	(code, Json(body))
}

/// Capability advertisement
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesResponse {
	pub service: &'static str,
	pub version: &'static str,
	pub providers: Vec<&'static str>,
	pub features: Vec<&'static str>,
	pub known_places: usize,
}

/// GET /capabilities - Advertise what the service can do
pub async fn capabilities() -> Json<CapabilitiesResponse> {
	Json(CapabilitiesResponse {
		service: "terrascope-aggregator",
		version: env!("CARGO_PKG_VERSION"),
		providers: vec!["weather", "marine", "radar", "elevation"],
		features: vec![
			"location-resolution",
			"risk-scoring",
			"fallback-substitution",
			"analysis-cache",
			"conversations",
		],
		known_places: gazetteer::entries().len(),
	})
}
