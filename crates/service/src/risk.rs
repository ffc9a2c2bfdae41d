//! Risk classification
//!
//! A deterministic function of the merged numeric signals. Fallback values
//! feed the same thresholds as real data; the orchestrator reports which
//! was which through `sources`, not by changing the score.

use terrascope_types::RiskLevel;

/// The numeric signals the classifier consumes. A request without a marine
/// slot contributes a zero wave height.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskSignals {
	pub wave_height_m: f64,
	pub wind_speed_kmh: f64,
	pub precipitation_probability_pct: f64,
}

/// Reference policy: wave > 1.5 m or wind > 25 km/h is high; wave > 0.8 m,
/// wind > 15 km/h or precipitation chance > 50 % is medium; otherwise low.
pub fn classify(signals: &RiskSignals) -> RiskLevel {
	if signals.wave_height_m > 1.5 || signals.wind_speed_kmh > 25.0 {
		RiskLevel::High
	} else if signals.wave_height_m > 0.8
		|| signals.wind_speed_kmh > 15.0
		|| signals.precipitation_probability_pct > 50.0
	{
		RiskLevel::Medium
	} else {
		RiskLevel::Low
	}
}
