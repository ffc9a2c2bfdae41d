//! Cache fingerprinting
//!
//! A fingerprint is a SHA-256 digest over the normalized query text, the
//! coordinates rounded to a fixed precision, and a coarse time bucket.
//! Identical requests inside one bucket therefore share a cache entry,
//! and the bucket boundary naturally expires stale fingerprints even
//! before the TTL does.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fmt::Write;
use terrascope_types::Coordinates;

/// Compute the cache key for an analysis request
pub fn fingerprint(
	query: &str,
	coordinates: Option<Coordinates>,
	coordinate_decimals: usize,
	time_bucket_secs: u64,
	now: DateTime<Utc>,
) -> String {
	let normalized = query
		.trim()
		.to_lowercase()
		.split_whitespace()
		.collect::<Vec<_>>()
		.join(" ");

	let coord_key = coordinates
		.map(|c| c.rounded_key(coordinate_decimals))
		.unwrap_or_else(|| "none".to_string());

	let bucket = if time_bucket_secs == 0 {
		0
	} else {
		now.timestamp().div_euclid(time_bucket_secs as i64)
	};

	let payload = format!("{}|{}|{}", normalized, coord_key, bucket);

	let digest = Sha256::digest(payload.as_bytes());
	let mut hex = String::with_capacity(digest.len() * 2);
	for byte in digest {
		// Writing to a String cannot fail.
		let _ = write!(&mut hex, "{:02x}", byte);
	}
	hex
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn at(secs: i64) -> DateTime<Utc> {
		Utc.timestamp_opt(secs, 0).unwrap()
	}

	#[test]
	fn test_identical_inputs_share_a_fingerprint() {
		let coords = Some(Coordinates::new(13.0418, 80.2841));
		let a = fingerprint("Fishing at Marina Beach", coords, 3, 300, at(1_700_000_000));
		let b = fingerprint("  fishing   at marina beach ", coords, 3, 300, at(1_700_000_100));
		assert_eq!(a, b);
	}

	#[test]
	fn test_bucket_boundary_changes_the_fingerprint() {
		let coords = Some(Coordinates::new(13.0418, 80.2841));
		let a = fingerprint("q", coords, 3, 300, at(1_700_000_000));
		let b = fingerprint("q", coords, 3, 300, at(1_700_000_400));
		assert_ne!(a, b);
	}

	#[test]
	fn test_nearby_coordinates_collapse() {
		let a = fingerprint("q", Some(Coordinates::new(13.04181, 80.28409)), 3, 300, at(0));
		let b = fingerprint("q", Some(Coordinates::new(13.04179, 80.28411)), 3, 300, at(0));
		assert_eq!(a, b);
	}

	#[test]
	fn test_missing_coordinates_get_their_own_key() {
		let with = fingerprint("q", Some(Coordinates::new(13.0, 80.2)), 3, 300, at(0));
		let without = fingerprint("q", None, 3, 300, at(0));
		assert_ne!(with, without);
	}
}
