use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	User,
	Assistant,
}

impl Role {
	pub fn speaker(self) -> &'static str {
		match self {
			Self::User => "User",
			Self::Assistant => "Assistant",
		}
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConversationTurn {
	pub role: Role,
	pub content: String,
}

impl ConversationTurn {
	pub fn user(content: impl Into<String>) -> Self {
		Self { role: Role::User, content: content.into() }
	}

	pub fn assistant(content: impl Into<String>) -> Self {
		Self { role: Role::Assistant, content: content.into() }
	}
}

/// Render the last `window` turns as the delimited conversation block. Empty
/// history renders nothing at all, not even the markers.
pub fn render_transcript(turns: &[ConversationTurn], window: usize) -> String {
	if turns.is_empty() || window == 0 {
		return String::new();
	}

	let start = turns.len().saturating_sub(window);
	let mut block = String::from("=== PREVIOUS CONVERSATION ===\n");

	for turn in &turns[start..] {
		block.push_str(turn.role.speaker());
		block.push_str(": ");
		block.push_str(&turn.content);
		block.push('\n');
	}

	block.push_str("=== END OF PREVIOUS CONVERSATION ===");

	block
}

/// Append-only conversation log for the assistant app, persisted as a JSON
/// array. The file is rewritten in full after each exchange; persistence
/// failures are logged and never interrupt the conversation.
pub struct ConversationStore {
	path: PathBuf,
	turns: Mutex<Vec<ConversationTurn>>,
}

impl ConversationStore {
	/// Load the log at `path`, treating a missing or unreadable file as an
	/// empty history. A corrupt file also loads as empty; the old content is
	/// overwritten on the next exchange.
	pub async fn load(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let turns = match tokio::fs::read_to_string(&path).await {
			Ok(raw) => match serde_json::from_str::<Vec<ConversationTurn>>(&raw) {
				Ok(turns) => turns,
				Err(err) => {
					warn!(
						path = %path.display(),
						error = %err,
						"Conversation log is corrupt; starting with an empty history.",
					);

					Vec::new()
				},
			},
			Err(_) => Vec::new(),
		};

		Self { path, turns: Mutex::new(turns) }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub async fn turns(&self) -> Vec<ConversationTurn> {
		self.turns.lock().await.clone()
	}

	/// Record one exchange and rewrite the log file.
	pub async fn append_exchange(&self, question: &str, answer: &str) {
		let mut turns = self.turns.lock().await;

		turns.push(ConversationTurn::user(question));
		turns.push(ConversationTurn::assistant(answer));

		let serialized = match serde_json::to_string_pretty(&*turns) {
			Ok(serialized) => serialized,
			Err(err) => {
				warn!(error = %err, "Failed to serialize the conversation log.");

				return;
			},
		};

		if let Err(err) = tokio::fs::write(&self.path, serialized).await {
			warn!(
				path = %self.path.display(),
				error = %err,
				"Failed to persist the conversation log.",
			);
		}
	}
}
