use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, JotService, NoteOp, Result};
use jot_domain::{
	note::{NoteDraft, NoteId},
	notegate,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateRequest {
	pub note_id: NoteId,
	pub title: Option<String>,
	pub body: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
	pub note_id: NoteId,
	pub op: NoteOp,
	pub reason_code: Option<String>,
}

impl JotService {
	pub fn update(&mut self, req: UpdateRequest) -> Result<UpdateResponse> {
		let now = OffsetDateTime::now_utc();

		if req.title.is_none() && req.body.is_none() {
			return Err(Error::InvalidRequest { message: "No updates provided.".to_string() });
		}

		let Some(note) = self.store.get_mut(req.note_id) else {
			return Err(Error::NotFound { message: "Note not found.".to_string() });
		};
		let next_title = req.title.unwrap_or_else(|| note.title.clone());
		let next_body = req.body.or_else(|| note.body.clone());
		let draft = NoteDraft { title: next_title.clone(), body: next_body.clone() };

		if let Err(code) = notegate::notegate(&draft, &self.cfg) {
			return Ok(UpdateResponse {
				note_id: req.note_id,
				op: NoteOp::Rejected,
				reason_code: Some(crate::notegate_reason_code(code).to_string()),
			});
		}
		if next_title == note.title && next_body == note.body {
			return Ok(UpdateResponse {
				note_id: req.note_id,
				op: NoteOp::None,
				reason_code: None,
			});
		}

		note.title = next_title;
		note.body = next_body;
		note.updated_at = now;

		tracing::info!(note_id = %req.note_id, "Updated note.");

		Ok(UpdateResponse { note_id: req.note_id, op: NoteOp::Update, reason_code: None })
	}
}
