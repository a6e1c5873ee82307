//! Shared fixtures for jot tests.

use jot_config::{Config, Notes, Service};
use jot_domain::note::NoteDraft;

/// Build a draft with an optional body.
pub fn draft(title: &str, body: Option<&str>) -> NoteDraft {
	NoteDraft { title: title.to_string(), body: body.map(str::to_string) }
}

/// The canonical three-note collection used across search tests: one note
/// matching both "milk" and "bread", and one note matching each alone.
pub fn sample_drafts() -> Vec<NoteDraft> {
	vec![
		draft("Shopping list", Some("milk eggs bread")),
		draft("Milk notes", Some("about cows")),
		draft("Trip plan", Some("bread and cheese")),
	]
}

/// Config with draft limits small enough to trip the gate.
pub fn tight_config() -> Config {
	Config {
		service: Service::default(),
		notes: Notes { max_title_chars: 5, max_body_chars: 10 },
	}
}
