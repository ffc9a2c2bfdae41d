//! Synthetic fallback values for failed providers
//!
//! Deterministic monthly climatology for the coastal South-India deployment
//! area. Values are realistic for the season but deliberately sit below the
//! medium-risk thresholds, so a fallback on its own never changes the
//! classification; only real provider data can push the risk level up.

use terrascope_types::{ElevationInfo, MarineObservation, WeatherObservation};

/// Seasonal-average surface weather for a given month (1..=12)
pub fn seasonal_weather(month: u32) -> WeatherObservation {
	// Summer (Mar-Jun), southwest monsoon (Jul-Sep), northeast monsoon
	// (Oct-Dec), winter otherwise.
	let (temperature_c, humidity_pct, wind_speed_kmh, precipitation_probability_pct, code) =
		match month {
			3..=6 => (34.0, 62.0, 12.0, 10.0, 1),
			7..=9 => (32.0, 70.0, 14.0, 30.0, 2),
			10..=12 => (29.0, 80.0, 14.0, 45.0, 3),
			_ => (27.0, 68.0, 10.0, 15.0, 1),
		};

	WeatherObservation {
		temperature_c,
		humidity_pct,
		wind_speed_kmh,
		precipitation_probability_pct,
		weather_code: code,
		description: "Seasonal average".to_string(),
	}
}

/// Seasonal-average sea state for a given month (1..=12)
pub fn seasonal_marine(month: u32) -> MarineObservation {
	let (wave_height_m, wave_period_s, sea_surface_temperature_c) = match month {
		3..=6 => (0.6, 7.0, 30.0),
		7..=9 => (0.75, 7.5, 28.5),
		10..=12 => (0.8, 8.0, 28.0),
		_ => (0.5, 6.5, 27.5),
	};

	MarineObservation {
		wave_height_m,
		wave_direction_deg: 120.0,
		wave_period_s,
		sea_surface_temperature_c: Some(sea_surface_temperature_c),
	}
}

/// Nominal coastal-plain elevation when the lookup is unavailable
pub fn default_elevation() -> ElevationInfo {
	ElevationInfo { elevation_m: 15.0 }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::risk::{classify, RiskSignals};
	use terrascope_types::RiskLevel;

	#[test]
	fn test_fallbacks_alone_never_exceed_low_risk() {
		for month in 1..=12 {
			let weather = seasonal_weather(month);
			let marine = seasonal_marine(month);
			let level = classify(&RiskSignals {
				wave_height_m: marine.wave_height_m,
				wind_speed_kmh: weather.wind_speed_kmh,
				precipitation_probability_pct: weather.precipitation_probability_pct,
			});
			assert_eq!(level, RiskLevel::Low, "month {} biased the score", month);
		}
	}

	#[test]
	fn test_monsoon_months_are_wetter() {
		assert!(
			seasonal_weather(11).precipitation_probability_pct
				> seasonal_weather(2).precipitation_probability_pct
		);
		assert!(seasonal_marine(11).wave_height_m > seasonal_marine(1).wave_height_m);
	}
}
