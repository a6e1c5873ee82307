use std::collections::HashSet;

/// Decompose a raw query into matchable terms.
///
/// The raw string is lower-cased, trimmed, and split on the single space
/// character; repeated terms are dropped, keeping first-seen order.
/// Consecutive spaces yield empty terms — those stay in the list and the
/// engine treats them as matching nothing.
pub fn terms(raw_query: &str) -> Vec<String> {
	let normalized = raw_query.to_lowercase();
	let mut out = Vec::new();
	let mut seen = HashSet::new();

	for term in normalized.trim().split(' ') {
		if seen.insert(term) {
			out.push(term.to_string());
		}
	}

	out
}
