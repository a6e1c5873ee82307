use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub notes: Notes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notes {
	/// Upper bound on a note title, in characters.
	pub max_title_chars: u32,
	/// Upper bound on a note body, in characters.
	pub max_body_chars: u32,
}

impl Default for Config {
	fn default() -> Self {
		Self { service: Service::default(), notes: Notes::default() }
	}
}

impl Default for Service {
	fn default() -> Self {
		Self { log_level: "info".to_string() }
	}
}

impl Default for Notes {
	fn default() -> Self {
		Self { max_title_chars: 200, max_body_chars: 10_000 }
	}
}
