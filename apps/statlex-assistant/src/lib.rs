use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use statlex_index::QdrantStore;
use statlex_service::{Answer, ConversationStore, StatlexService};

const DEFAULT_HISTORY_PATH: &str = "conversation_history.json";
const BANNER: &str = "Statlex legal assistant. Ask about BNS, BNSS, or BSA; type 'help' for commands.";
const HELP: &str = "Commands:\n  \
	help    show this message\n  \
	simple  toggle plain answers (no decorative heading)\n  \
	exit    leave (also: quit, q)\n\
	Anything else is asked as a legal question.";

#[derive(Debug, Parser)]
#[command(
	version = statlex_cli::VERSION,
	rename_all = "kebab",
	styles = statlex_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = statlex_config::load(&args.config)?;

	init_tracing(&config)?;

	let history_path =
		config.history.path.clone().unwrap_or_else(|| DEFAULT_HISTORY_PATH.to_string());
	let store = Arc::new(QdrantStore::new(&config.storage.qdrant)?);
	let service = StatlexService::new(config, store);
	let log = ConversationStore::load(&history_path).await;
	let mut simple_mode = false;
	let stdin = BufReader::new(tokio::io::stdin());
	let mut stdout = tokio::io::stdout();
	let mut lines = stdin.lines();

	stdout.write_all(format!("{BANNER}\n").as_bytes()).await?;
	stdout.write_all(b"> ").await?;
	stdout.flush().await?;

	while let Some(line) = lines.next_line().await? {
		let input = line.trim();

		match input {
			"" => {},
			"exit" | "quit" | "q" => {
				stdout.write_all(b"Goodbye.\n").await?;

				break;
			},
			"help" => {
				stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
			},
			"simple" => {
				simple_mode = !simple_mode;

				let notice = if simple_mode {
					"Simple mode on: plain answers.\n"
				} else {
					"Simple mode off: decorated answers.\n"
				};

				stdout.write_all(notice.as_bytes()).await?;
			},
			question => {
				let turns = log.turns().await;

				match service.answer(question, &turns).await {
					Ok(answer) => {
						stdout.write_all(render(&answer, simple_mode).as_bytes()).await?;
						log.append_exchange(question, &answer.text).await;
					},
					Err(err) => {
						stdout
							.write_all(format!("{}\n", err.user_message()).as_bytes())
							.await?;
						tracing::warn!(error = %err, "Exchange failed.");
					},
				}
			},
		}

		stdout.write_all(b"> ").await?;
		stdout.flush().await?;
	}

	Ok(())
}

fn render(answer: &Answer, simple_mode: bool) -> String {
	if simple_mode {
		return format!("Answer: {}\n", answer.text);
	}

	let rule = "=".repeat(50);

	format!("{rule}\n  {}\n{rule}\n{}\n", answer.style.heading(), answer.text)
}

fn init_tracing(config: &statlex_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::render;
	use statlex_domain::style::ResponseStyle;
	use statlex_service::Answer;

	#[test]
	fn decorated_render_carries_the_style_heading() {
		let answer =
			Answer { text: "Theft is defined in the code.".to_string(), style: ResponseStyle::Definition };
		let rendered = render(&answer, false);

		assert!(rendered.contains("LEGAL DEFINITION"));
		assert!(rendered.contains("Theft is defined in the code."));
	}

	#[test]
	fn simple_render_is_plain() {
		let answer = Answer { text: "Plain answer.".to_string(), style: ResponseStyle::General };

		assert_eq!(render(&answer, true), "Answer: Plain answer.\n");
	}
}
