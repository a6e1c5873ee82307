use std::collections::{HashMap, HashSet};

use crate::{
	note::{Note, NoteId},
	query,
};

/// Relevance search over a caller-supplied note collection.
///
/// Each unique query term contributes the subset of notes whose title or
/// body contains it as a substring (case-insensitive). The subsets are
/// concatenated, tallied per note identifier, deduplicated by identifier,
/// and sorted descending by how many distinct terms each note matched.
/// The sort is stable, so notes with equal tallies keep the order in which
/// they first matched.
///
/// The collection is borrowed for the duration of the call and never
/// mutated; identical inputs always produce identical output.
pub fn search<'a>(all_notes: &'a [Note], raw_query: &str) -> Vec<&'a Note> {
	let terms = query::terms(raw_query);
	let mut combined = Vec::new();

	for term in &terms {
		for note in all_notes {
			if matches_term(note, term) {
				combined.push(note);
			}
		}
	}

	let mut tally: HashMap<NoteId, usize> = HashMap::new();

	for note in &combined {
		*tally.entry(note.id).or_insert(0) += 1;
	}

	let mut seen = HashSet::new();
	let mut unique: Vec<&Note> = Vec::new();

	for note in combined {
		if seen.insert(note.id) {
			unique.push(note);
		}
	}

	unique.sort_by(|a, b| tally[&b.id].cmp(&tally[&a.id]));

	unique
}

/// Whether a note's title or body contains `term` as a substring.
///
/// An empty term matches nothing: `str::contains("")` is vacuously true, and
/// inheriting that would turn a blank query into "show everything".
pub fn matches_term(note: &Note, term: &str) -> bool {
	if term.is_empty() {
		return false;
	}
	if note.title.to_lowercase().contains(term) {
		return true;
	}

	note.body.as_deref().map(|body| body.to_lowercase().contains(term)).unwrap_or(false)
}

/// The distinct terms of an already-decomposed query that a note matches,
/// in term order. Used to annotate search results.
pub fn matched_terms(note: &Note, terms: &[String]) -> Vec<String> {
	terms.iter().filter(|term| matches_term(note, term.as_str())).cloned().collect()
}
