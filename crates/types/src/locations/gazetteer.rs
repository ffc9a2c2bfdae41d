//! Embedded gazetteer and alias tables
//!
//! The gazetteer is an ordered static slice so that scan-based matching in
//! the resolver has a fixed, reproducible iteration order. Index maps are
//! built once at first use and never mutated afterwards.

use super::{GazetteerEntry, PlaceKind, Prominence};
use lazy_static::lazy_static;
use std::collections::HashMap;

use PlaceKind::*;
use Prominence::*;

macro_rules! place {
	($name:literal, $lat:literal, $lng:literal, $region:literal, $kind:expr, $prom:expr) => {
		GazetteerEntry {
			name: $name,
			latitude: $lat,
			longitude: $lng,
			region: $region,
			kind: $kind,
			prominence: $prom,
			parent: None,
		}
	};
	($name:literal, $lat:literal, $lng:literal, $region:literal, $kind:expr, $prom:expr, $parent:literal) => {
		GazetteerEntry {
			name: $name,
			latitude: $lat,
			longitude: $lng,
			region: $region,
			kind: $kind,
			prominence: $prom,
			parent: Some($parent),
		}
	};
}

/// Covers the deployment footprint: Chennai metro, Tamil Nadu districts,
/// coastal spots, hill stations and the nearby metros users ask about.
/// Scan order matters for the resolver's first-match tie-break, so major
/// cities come first.
pub static GAZETTEER: &[GazetteerEntry] = &[
	// Major cities
	place!("chennai", 13.0827, 80.2707, "Tamil Nadu", City, Major),
	place!("madurai", 9.9252, 78.1198, "Tamil Nadu", City, Major),
	place!("coimbatore", 11.0168, 76.9558, "Tamil Nadu", City, Major),
	place!("tiruchirapalli", 10.7905, 78.7047, "Tamil Nadu", City, Major),
	place!("salem", 11.6643, 78.1460, "Tamil Nadu", City, Major),
	place!("tirunelveli", 8.7139, 77.7567, "Tamil Nadu", City, Major),
	place!("vellore", 12.9165, 79.1325, "Tamil Nadu", City, Major),
	place!("erode", 11.3410, 77.7172, "Tamil Nadu", City, Minor),
	place!("thanjavur", 10.7870, 79.1378, "Tamil Nadu", City, Major),
	place!("puducherry", 11.9416, 79.8083, "Puducherry", City, Major),
	place!("bangalore", 12.9716, 77.5946, "Karnataka", City, Major),
	place!("mumbai", 19.0760, 72.8777, "Maharashtra", City, Major),
	place!("delhi", 28.7041, 77.1025, "Delhi", City, Major),
	place!("kochi", 9.9312, 76.2673, "Kerala", City, Major),
	// Coastal towns
	place!("thoothukudi", 8.7642, 78.1348, "Tamil Nadu", City, Minor),
	place!("kanyakumari", 8.0883, 77.5385, "Tamil Nadu", City, Major),
	place!("rameswaram", 9.2876, 79.3129, "Tamil Nadu", City, Major),
	place!("nagapattinam", 10.7660, 79.8424, "Tamil Nadu", City, Minor),
	place!("cuddalore", 11.7480, 79.7714, "Tamil Nadu", City, Minor),
	place!("kumbakonam", 10.9617, 79.3881, "Tamil Nadu", City, Minor),
	place!("chidambaram", 11.3995, 79.6935, "Tamil Nadu", City, Minor),
	// Heritage sites
	place!("mahabalipuram", 12.6269, 80.1927, "Tamil Nadu", Heritage, Major),
	place!("thanjavur temple", 10.7828, 79.1318, "Tamil Nadu", Heritage, Minor, "thanjavur"),
	// Hill stations
	place!("udhagamandalam", 11.4102, 76.6950, "Tamil Nadu", HillStation, Major),
	place!("kodaikanal", 10.2381, 77.4892, "Tamil Nadu", HillStation, Major),
	place!("yercaud", 11.7748, 78.2097, "Tamil Nadu", HillStation, Minor),
	place!("coonoor", 11.3530, 76.7959, "Tamil Nadu", HillStation, Minor),
	place!("valparai", 10.3270, 76.9554, "Tamil Nadu", HillStation, Minor),
	// Beaches
	place!("marina beach", 13.0418, 80.2841, "Tamil Nadu", Beach, Major, "chennai"),
	place!("besant nagar beach", 13.0001, 80.2717, "Tamil Nadu", Beach, Major, "chennai"),
	place!("covelong beach", 12.7925, 80.2514, "Tamil Nadu", Beach, Minor),
	place!("dhanushkodi beach", 9.1535, 79.4440, "Tamil Nadu", Beach, Minor, "rameswaram"),
	place!("silver beach", 11.7554, 79.7850, "Tamil Nadu", Beach, Minor, "cuddalore"),
	// National parks
	place!("mudumalai national park", 11.5430, 76.5320, "Tamil Nadu", NationalPark, Minor),
	place!("guindy national park", 13.0067, 80.2206, "Tamil Nadu", NationalPark, Minor, "chennai"),
	place!("gulf of mannar marine national park", 9.1200, 79.4600, "Tamil Nadu", NationalPark, Minor),
	// Chennai neighbourhoods
	place!("besant nagar", 12.9986, 80.2669, "Tamil Nadu", Area, Minor, "chennai"),
	place!("adyar", 13.0063, 80.2574, "Tamil Nadu", Area, Minor, "chennai"),
	place!("mylapore", 13.0368, 80.2676, "Tamil Nadu", Area, Minor, "chennai"),
	place!("velachery", 12.9815, 80.2180, "Tamil Nadu", Area, Minor, "chennai"),
	// Districts
	place!("nilgiris", 11.4916, 76.7337, "Tamil Nadu", District, Minor),
	place!("kanchipuram", 12.8342, 79.7036, "Tamil Nadu", District, Minor),
	place!("tiruvallur", 13.1439, 79.8945, "Tamil Nadu", District, Minor),
	// States
	place!("tamil nadu", 11.1271, 78.6569, "Tamil Nadu", State, Major),
	place!("kerala", 10.8505, 76.2711, "Kerala", State, Major),
	place!("karnataka", 15.3173, 75.7139, "Karnataka", State, Major),
];

/// Surface-form synonyms mapped many-to-one onto canonical keys, applied
/// before any gazetteer lookup.
pub static ALIASES: &[(&str, &str)] = &[
	("madras", "chennai"),
	("trichy", "tiruchirapalli"),
	("tiruchy", "tiruchirapalli"),
	("pondicherry", "puducherry"),
	("pondy", "puducherry"),
	("ooty", "udhagamandalam"),
	("ootacamund", "udhagamandalam"),
	("kodai", "kodaikanal"),
	("bengaluru", "bangalore"),
	("blr", "bangalore"),
	("bombay", "mumbai"),
	("new delhi", "delhi"),
	("tuticorin", "thoothukudi"),
	("cape comorin", "kanyakumari"),
	("mamallapuram", "mahabalipuram"),
	("tanjore", "thanjavur"),
	("elliots beach", "besant nagar beach"),
	("edward elliots beach", "besant nagar beach"),
];

lazy_static! {
	static ref GAZETTEER_INDEX: HashMap<&'static str, &'static GazetteerEntry> =
		GAZETTEER.iter().map(|e| (e.name, e)).collect();
	static ref ALIAS_INDEX: HashMap<&'static str, &'static str> =
		ALIASES.iter().copied().collect();
}

/// All entries in fixed scan order
pub fn entries() -> &'static [GazetteerEntry] {
	GAZETTEER
}

/// Exact lookup by canonical key
pub fn lookup(name: &str) -> Option<&'static GazetteerEntry> {
	GAZETTEER_INDEX.get(name).copied()
}

/// Canonical target for an alias, if the whole string is a known synonym
pub fn alias_target(name: &str) -> Option<&'static str> {
	ALIAS_INDEX.get(name).copied()
}
