use time::OffsetDateTime;
use uuid::Uuid;

/// Stable note identifier, assigned by the store on insert and never
/// reassigned while the note exists.
pub type NoteId = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
	pub id: NoteId,
	pub title: String,
	pub body: Option<String>,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

/// An unvalidated note as submitted by a caller, before the gate and before
/// an identifier exists.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NoteDraft {
	pub title: String,
	pub body: Option<String>,
}
