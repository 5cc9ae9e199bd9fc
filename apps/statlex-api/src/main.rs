use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = statlex_api::Args::parse();
	statlex_api::run(args).await
}
