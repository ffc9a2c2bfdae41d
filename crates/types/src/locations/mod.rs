//! Place names, the embedded gazetteer and free-text location resolution

pub mod gazetteer;
pub mod resolver;

pub use resolver::resolve;

use crate::Coordinates;
use serde::{Deserialize, Serialize};

/// Category of a gazetteer place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
	City,
	Area,
	Beach,
	Heritage,
	HillStation,
	NationalPark,
	District,
	State,
}

/// How well-known a place is, used by callers to rank suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prominence {
	Major,
	Minor,
}

/// A named place in the static gazetteer
///
/// Entries are embedded at build time and loaded once as immutable
/// process-wide state; there is no runtime mutation path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazetteerEntry {
	/// Canonical lowercase key, unique within the gazetteer
	pub name: &'static str,
	pub latitude: f64,
	pub longitude: f64,
	/// Administrative area the place belongs to
	pub region: &'static str,
	pub kind: PlaceKind,
	pub prominence: Prominence,
	/// Canonical name of the containing city/area, never cyclic
	pub parent: Option<&'static str>,
}

impl GazetteerEntry {
	pub fn coordinates(&self) -> Coordinates {
		Coordinates::new(self.latitude, self.longitude)
	}
}

/// Outcome of resolving free text to a place
///
/// A failed resolution is an explicit not-found value; callers must never
/// treat it as a valid coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
	pub found: bool,
	/// Canonical gazetteer key that was actually hit
	#[serde(skip_serializing_if = "Option::is_none")]
	pub matched_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coordinates: Option<Coordinates>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub region: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub kind: Option<PlaceKind>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub prominence: Option<Prominence>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent: Option<String>,
}

impl ResolvedLocation {
	pub fn not_found() -> Self {
		Self {
			found: false,
			matched_name: None,
			coordinates: None,
			region: None,
			kind: None,
			prominence: None,
			parent: None,
		}
	}

	pub fn from_entry(entry: &GazetteerEntry) -> Self {
		Self {
			found: true,
			matched_name: Some(entry.name.to_string()),
			coordinates: Some(entry.coordinates()),
			region: Some(entry.region.to_string()),
			kind: Some(entry.kind),
			prominence: Some(entry.prominence),
			parent: entry.parent.map(|p| p.to_string()),
		}
	}
}
