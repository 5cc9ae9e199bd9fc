use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
	EMPTY_QUERY_MESSAGE, Error, PartitionedMatches, Result, StatlexService, context,
	history::{self, ConversationTurn},
	prompt::{self, PromptParts},
};
use statlex_domain::style::{self, ResponseStyle};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
	pub query: String,
	#[serde(default)]
	pub conversation_history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
	pub response: String,
	pub error: bool,
	/// Internal diagnostic detail for failures; never part of `response`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
}

/// A synthesized answer plus the style inferred from the question, which the
/// assistant app uses to pick its decorative heading.
#[derive(Debug)]
pub struct Answer {
	pub text: String,
	pub style: ResponseStyle,
}

impl StatlexService {
	/// Full pipeline for one question: classify the style, retrieve, partition
	/// and assemble context, render the history window, compose the prompt,
	/// and generate.
	pub async fn answer(
		&self,
		question: &str,
		conversation_history: &[ConversationTurn],
	) -> Result<Answer> {
		let style = style::classify(question);
		let matches = self.retrieve(question).await?;
		let partitioned = PartitionedMatches::partition(matches);
		let budget = context::chunk_budget(&self.cfg.context, question);
		let rendered_context = context::assemble(&partitioned, budget);
		let rendered_history = history::render_transcript(
			conversation_history,
			self.cfg.context.history_window as usize,
		);
		let composed = self.compose(style, &rendered_context, &rendered_history, question).await;
		let text = self
			.providers
			.completion
			.complete(&self.cfg.providers.llm, &composed)
			.await
			.map_err(|err| Error::Generation { message: err.to_string() })?;

		Ok(Answer { text, style })
	}

	/// One chat exchange. Empty and whitespace-only questions get the fixed
	/// please-rephrase reply without touching retrieval; pipeline failures
	/// map to their generic user message with the detail carried separately.
	pub async fn chat(&self, request: &ChatRequest) -> ChatReply {
		if request.query.trim().is_empty() {
			return ChatReply {
				response: EMPTY_QUERY_MESSAGE.to_string(),
				error: false,
				details: None,
			};
		}

		match self.answer(&request.query, &request.conversation_history).await {
			Ok(answer) => ChatReply { response: answer.text, error: false, details: None },
			Err(err) => ChatReply {
				response: err.user_message().to_string(),
				error: true,
				details: Some(err.to_string()),
			},
		}
	}

	/// Prefer the configured template file; fall back to the builtin guidance
	/// when none is configured or the file cannot be read.
	async fn compose(
		&self,
		style: ResponseStyle,
		rendered_context: &str,
		rendered_history: &str,
		question: &str,
	) -> String {
		if let Some(path) = &self.cfg.prompt.template_path {
			match tokio::fs::read_to_string(path).await {
				Ok(template) => {
					let question_block = if rendered_history.is_empty() {
						format!("Question: {question}")
					} else {
						format!("{rendered_history}\n\nQuestion: {question}")
					};

					return prompt::fill_template(&template, rendered_context, &question_block);
				},
				Err(err) => {
					warn!(
						path = %path,
						error = %err,
						"Failed to read the prompt template; using the builtin guidance.",
					);
				},
			}
		}

		PromptParts {
			system_guidance: prompt::builtin_guidance(style),
			rendered_context: rendered_context.to_string(),
			rendered_history: rendered_history.to_string(),
			current_question: question.to_string(),
		}
		.render()
	}
}
