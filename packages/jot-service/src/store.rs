use time::OffsetDateTime;
use uuid::Uuid;

use jot_domain::note::{Note, NoteId};

/// The in-memory note collection. Insertion order is preserved; identifiers
/// are assigned on insert and unique within one store.
#[derive(Debug, Default)]
pub struct NoteStore {
	notes: Vec<Note>,
}

impl NoteStore {
	pub fn new() -> Self {
		Self { notes: Vec::new() }
	}

	/// Insert a gated draft and assign it a fresh identifier.
	pub fn insert(&mut self, title: String, body: Option<String>, now: OffsetDateTime) -> NoteId {
		let id = Uuid::new_v4();

		self.notes.push(Note { id, title, body, created_at: now, updated_at: now });

		id
	}

	pub fn get(&self, id: NoteId) -> Option<&Note> {
		self.notes.iter().find(|note| note.id == id)
	}

	pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
		self.notes.iter_mut().find(|note| note.id == id)
	}

	pub fn remove(&mut self, id: NoteId) -> Option<Note> {
		let index = self.notes.iter().position(|note| note.id == id)?;

		Some(self.notes.remove(index))
	}

	pub fn all(&self) -> &[Note] {
		&self.notes
	}

	pub fn len(&self) -> usize {
		self.notes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.notes.is_empty()
	}
}
