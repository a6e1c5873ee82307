mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Notes, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.notes.max_title_chars == 0 {
		return Err(Error::Validation {
			message: "notes.max_title_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.notes.max_body_chars == 0 {
		return Err(Error::Validation {
			message: "notes.max_body_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.notes.max_body_chars < cfg.notes.max_title_chars {
		return Err(Error::Validation {
			message: "notes.max_body_chars must not be less than notes.max_title_chars."
				.to_string(),
		});
	}

	Ok(())
}
