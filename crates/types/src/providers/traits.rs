//! Provider client traits
//!
//! Each trait covers one external concern. Implementations are stateless,
//! hold no mutable state between calls, and are safe to invoke from
//! concurrent in-flight requests.

use super::{ElevationInfo, MarineObservation, ProviderResult, RadarSnapshot, WeatherObservation};
use crate::Coordinates;
use async_trait::async_trait;
use std::fmt::Debug;

/// Current-conditions weather source
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
	async fn current_weather(&self, coords: Coordinates) -> ProviderResult<WeatherObservation>;

	/// Human-readable source name for attribution in results
	fn name(&self) -> &str;
}

/// Sea-state forecast source
#[async_trait]
pub trait MarineProvider: Send + Sync + Debug {
	async fn marine(&self, coords: Coordinates) -> ProviderResult<MarineObservation>;

	fn name(&self) -> &str;
}

/// Precipitation radar tile configuration source
#[async_trait]
pub trait RadarProvider: Send + Sync + Debug {
	async fn radar_snapshot(&self) -> ProviderResult<RadarSnapshot>;

	fn name(&self) -> &str;
}

/// Imagery/terrain source, currently elevation lookup
#[async_trait]
pub trait ImageryProvider: Send + Sync + Debug {
	async fn elevation(&self, coords: Coordinates) -> ProviderResult<ElevationInfo>;

	fn name(&self) -> &str;
}
