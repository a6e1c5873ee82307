use crate::note::NoteDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
	RejectEmptyTitle,
	RejectTitleTooLong,
	RejectBodyTooLong,
}

/// Gate an incoming draft against the configured limits. Titles are
/// mandatory; bodies are optional but bounded.
pub fn notegate(draft: &NoteDraft, cfg: &jot_config::Config) -> Result<(), RejectCode> {
	if draft.title.trim().is_empty() {
		return Err(RejectCode::RejectEmptyTitle);
	}
	if draft.title.chars().count() as u32 > cfg.notes.max_title_chars {
		return Err(RejectCode::RejectTitleTooLong);
	}
	if let Some(body) = draft.body.as_deref()
		&& body.chars().count() as u32 > cfg.notes.max_body_chars
	{
		return Err(RejectCode::RejectBodyTooLong);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> jot_config::Config {
		jot_config::Config {
			service: jot_config::Service { log_level: "info".to_string() },
			notes: jot_config::Notes { max_title_chars: 10, max_body_chars: 20 },
		}
	}

	fn draft(title: &str, body: Option<&str>) -> NoteDraft {
		NoteDraft { title: title.to_string(), body: body.map(str::to_string) }
	}

	#[test]
	fn accepts_title_only_draft() {
		assert_eq!(notegate(&draft("groceries", None), &config()), Ok(()));
	}

	#[test]
	fn rejects_blank_title() {
		assert_eq!(
			notegate(&draft("   ", Some("body")), &config()),
			Err(RejectCode::RejectEmptyTitle)
		);
	}

	#[test]
	fn rejects_long_title() {
		assert_eq!(
			notegate(&draft("12345678901", None), &config()),
			Err(RejectCode::RejectTitleTooLong)
		);
	}

	#[test]
	fn rejects_long_body() {
		let body = "x".repeat(21);

		assert_eq!(
			notegate(&draft("ok", Some(&body)), &config()),
			Err(RejectCode::RejectBodyTooLong)
		);
	}

	#[test]
	fn counts_characters_not_bytes() {
		// Ten multibyte characters fit a ten-character title limit.
		assert_eq!(notegate(&draft("éééééééééé", None), &config()), Ok(()));
	}
}
