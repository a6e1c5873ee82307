use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, JotService, Result};
use jot_domain::note::NoteId;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteFetchRequest {
	pub note_id: NoteId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteFetchResponse {
	pub note_id: NoteId,
	pub title: String,
	pub body: Option<String>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

impl JotService {
	pub fn get_note(&self, req: NoteFetchRequest) -> Result<NoteFetchResponse> {
		let Some(note) = self.store.get(req.note_id) else {
			return Err(Error::NotFound { message: "Unknown note_id.".to_string() });
		};

		Ok(NoteFetchResponse {
			note_id: note.id,
			title: note.title.clone(),
			body: note.body.clone(),
			created_at: note.created_at,
			updated_at: note.updated_at,
		})
	}
}
