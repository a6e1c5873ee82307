use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::JotService;
use jot_domain::note::NoteId;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListItem {
	pub note_id: NoteId,
	pub title: String,
	pub body: Option<String>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
	pub items: Vec<ListItem>,
}

impl JotService {
	/// Every note, in insertion order.
	pub fn list(&self) -> ListResponse {
		let items = self
			.store
			.all()
			.iter()
			.map(|note| ListItem {
				note_id: note.id,
				title: note.title.clone(),
				body: note.body.clone(),
				created_at: note.created_at,
				updated_at: note.updated_at,
			})
			.collect();

		ListResponse { items }
	}
}
