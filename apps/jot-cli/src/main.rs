use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = jot_cli::Args::parse();
	jot_cli::run(args)
}
