use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{JotService, NoteOp, Result};
use jot_domain::{
	note::{NoteDraft, NoteId},
	notegate,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddNoteRequest {
	pub title: String,
	pub body: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddNoteResponse {
	/// Absent when the draft was rejected.
	pub note_id: Option<NoteId>,
	pub op: NoteOp,
	pub reason_code: Option<String>,
}

impl JotService {
	pub fn add_note(&mut self, req: AddNoteRequest) -> Result<AddNoteResponse> {
		let now = OffsetDateTime::now_utc();
		let draft = NoteDraft { title: req.title, body: req.body };

		if let Err(code) = notegate::notegate(&draft, &self.cfg) {
			return Ok(AddNoteResponse {
				note_id: None,
				op: NoteOp::Rejected,
				reason_code: Some(crate::notegate_reason_code(code).to_string()),
			});
		}

		let note_id = self.store.insert(draft.title, draft.body, now);

		tracing::info!(%note_id, "Added note.");

		Ok(AddNoteResponse { note_id: Some(note_id), op: NoteOp::Add, reason_code: None })
	}
}
