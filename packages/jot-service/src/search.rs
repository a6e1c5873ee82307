use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::JotService;
use jot_domain::{note::NoteId, query, search};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchRequest {
	pub query: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchItem {
	pub note_id: NoteId,
	pub title: String,
	pub body: Option<String>,
	/// How many distinct query terms this note matched.
	pub relevance: u32,
	pub matched_terms: Vec<String>,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
	pub items: Vec<SearchItem>,
}

impl JotService {
	/// Relevance search over the whole collection. Total over any query
	/// string: an unmatched or blank query yields an empty item list.
	pub fn search(&self, req: SearchRequest) -> SearchResponse {
		let terms = query::terms(&req.query);
		let items: Vec<SearchItem> = search::search(self.store.all(), &req.query)
			.into_iter()
			.map(|note| {
				let matched = search::matched_terms(note, &terms);

				SearchItem {
					note_id: note.id,
					title: note.title.clone(),
					body: note.body.clone(),
					relevance: matched.len() as u32,
					matched_terms: matched,
					updated_at: note.updated_at,
				}
			})
			.collect();

		tracing::debug!(query = %req.query, results = items.len(), "Search completed.");

		SearchResponse { items }
	}
}
