use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = statlex_assistant::Args::parse();
	statlex_assistant::run(args).await
}
