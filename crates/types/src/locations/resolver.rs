//! Free-text location resolution
//!
//! Tiered matching against the embedded gazetteer: normalization, alias
//! substitution, exact lookup, substring scan, then token-overlap scoring.
//! The first tier that produces a hit wins; tiers never blend.
//!
//! Known limitation: the substring and token-overlap tiers break ties by
//! taking the first match in gazetteer scan order, which is deterministic
//! but otherwise arbitrary. An ambiguous fragment can therefore land on an
//! earlier entry rather than the most specific one.

use super::{gazetteer, ResolvedLocation};

/// Qualifier words stripped from queries before matching. Removed only as
/// whole tokens so they never eat into a longer place name.
const QUALIFIERS: &[&str] = &[
	"district", "city", "town", "village", "near", "around", "in", "at", "the",
];

/// Lowercase, drop punctuation, collapse whitespace and remove qualifier
/// tokens.
pub fn normalize(text: &str) -> String {
	let lowered = text.to_lowercase();
	let cleaned: String = lowered
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() || c.is_whitespace() { c } else { ' ' })
		.collect();

	cleaned
		.split_whitespace()
		.filter(|token| !QUALIFIERS.contains(token))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Resolve free text to a gazetteer place
///
/// Never fails: empty or unmatchable input yields an explicit not-found
/// value.
pub fn resolve(text: &str) -> ResolvedLocation {
	let normalized = normalize(text);
	if normalized.is_empty() {
		return ResolvedLocation::not_found();
	}

	// Alias substitution applies only when the whole normalized string is a
	// known synonym.
	let query = match gazetteer::alias_target(&normalized) {
		Some(target) => target.to_string(),
		None => normalized,
	};

	if let Some(entry) = gazetteer::lookup(&query) {
		return ResolvedLocation::from_entry(entry);
	}

	// Substring scan, first match in gazetteer order wins.
	for entry in gazetteer::entries() {
		if query.contains(entry.name) || entry.name.contains(query.as_str()) {
			return ResolvedLocation::from_entry(entry);
		}
	}

	// Token-overlap scoring: count token pairs where one side contains the
	// other; strictly-higher score replaces, so ties keep the first hit.
	let query_tokens: Vec<&str> = query.split_whitespace().collect();
	let mut best: Option<(&'static super::GazetteerEntry, usize)> = None;
	for entry in gazetteer::entries() {
		let score = token_overlap(&query_tokens, entry.name);
		if score > 0 && best.map_or(true, |(_, s)| score > s) {
			best = Some((entry, score));
		}
	}

	match best {
		Some((entry, _)) => ResolvedLocation::from_entry(entry),
		None => ResolvedLocation::not_found(),
	}
}

fn token_overlap(query_tokens: &[&str], key: &str) -> usize {
	let key_tokens: Vec<&str> = key.split_whitespace().collect();
	let mut score = 0;
	for qt in query_tokens {
		for kt in &key_tokens {
			if qt.contains(kt) || kt.contains(qt) {
				score += 1;
			}
		}
	}
	score
}
