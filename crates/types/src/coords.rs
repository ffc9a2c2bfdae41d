//! Geographic coordinate primitives

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

impl Coordinates {
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Whether the pair lies inside the WGS84 domain
	pub fn is_valid(&self) -> bool {
		(-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
	}

	/// Fixed-precision rendering used for cache fingerprints and derived
	/// conversation ids, so nearby floats map to the same key.
	pub fn rounded_key(&self, decimals: usize) -> String {
		format!("{:.dec$},{:.dec$}", self.lat, self.lng, dec = decimals)
	}
}

impl fmt::Display for Coordinates {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:.4}, {:.4})", self.lat, self.lng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validity_bounds() {
		assert!(Coordinates::new(13.0827, 80.2707).is_valid());
		assert!(Coordinates::new(-90.0, 180.0).is_valid());
		assert!(!Coordinates::new(91.0, 0.0).is_valid());
		assert!(!Coordinates::new(0.0, -180.5).is_valid());
	}

	#[test]
	fn test_rounded_key_collapses_nearby_points() {
		let a = Coordinates::new(13.04181, 80.28409);
		let b = Coordinates::new(13.04179, 80.28411);
		assert_eq!(a.rounded_key(3), b.rounded_key(3));
		assert_eq!(a.rounded_key(3), "13.042,80.284");
	}
}
