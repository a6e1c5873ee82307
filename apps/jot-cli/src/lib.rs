use std::{fs, path::PathBuf};

use clap::{
	Parser, Subcommand,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use jot_domain::note::NoteDraft;
use jot_service::{AddNoteRequest, JotService, NoteOp, SearchRequest};

#[derive(Debug, Parser)]
#[command(
	version,
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	/// TOML config file; built-in defaults apply when omitted.
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// JSON file holding an array of note drafts ({"title", "body"?}).
	#[arg(long, short = 'n', value_name = "FILE")]
	pub notes: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Print every loaded note in insertion order.
	List,
	/// Relevance-search the loaded notes.
	Search { query: String },
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = match args.config.as_deref() {
		Some(path) => jot_config::load(path)?,
		None => jot_config::Config::default(),
	};

	init_tracing(&cfg);

	let raw = fs::read_to_string(&args.notes)?;
	let drafts = parse_drafts(&raw)?;
	let mut service = JotService::new(cfg);

	for draft in drafts {
		let response =
			service.add_note(AddNoteRequest { title: draft.title.clone(), body: draft.body })?;

		if response.op == NoteOp::Rejected {
			tracing::warn!(
				title = %draft.title,
				reason = response.reason_code.as_deref().unwrap_or("unknown"),
				"Skipped rejected draft."
			);
		}
	}

	match args.command {
		Command::List => {
			for item in service.list().items {
				println!("{}  {}", item.note_id, item.title);
			}
		},
		Command::Search { query } => {
			for item in service.search(SearchRequest { query }).items {
				println!(
					"{}  {}  (matched: {})",
					item.note_id,
					item.title,
					item.matched_terms.join(", "),
				);
			}
		},
	}

	Ok(())
}

fn parse_drafts(raw: &str) -> color_eyre::Result<Vec<NoteDraft>> {
	serde_json::from_str(raw).map_err(|err| eyre::eyre!("Invalid notes file: {err}."))
}

fn init_tracing(cfg: &jot_config::Config) {
	let filter =
		EnvFilter::try_new(&cfg.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}
