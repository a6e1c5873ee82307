use serde::{Deserialize, Serialize};

use crate::{Error, JotService, NoteOp, Result};
use jot_domain::note::NoteId;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
	pub note_id: NoteId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
	pub note_id: NoteId,
	pub op: NoteOp,
}

impl JotService {
	/// Remove a note from the collection. The identifier is never reused.
	pub fn delete(&mut self, req: DeleteRequest) -> Result<DeleteResponse> {
		let Some(note) = self.store.remove(req.note_id) else {
			return Err(Error::NotFound { message: "Note not found.".to_string() });
		};

		tracing::info!(note_id = %note.id, "Deleted note.");

		Ok(DeleteResponse { note_id: note.id, op: NoteOp::Delete })
	}
}
