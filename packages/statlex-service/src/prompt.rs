use statlex_domain::style::ResponseStyle;

pub const CONTEXT_PLACEHOLDER: &str = "{context}";
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// The composed prompt, held as explicit parts instead of a single string so
/// later substitutions can never rewrite earlier ones. Rendered by plain
/// concatenation in a fixed order.
#[derive(Debug)]
pub struct PromptParts {
	pub system_guidance: String,
	pub rendered_context: String,
	pub rendered_history: String,
	pub current_question: String,
}

impl PromptParts {
	/// Guidance, context, optional conversation block, then the question,
	/// verbatim and last.
	pub fn render(&self) -> String {
		let mut parts = vec![self.system_guidance.as_str()];

		if !self.rendered_context.is_empty() {
			parts.push(self.rendered_context.as_str());
		}
		if !self.rendered_history.is_empty() {
			parts.push(self.rendered_history.as_str());
		}

		let question = format!("Question: {}", self.current_question);

		parts.push(&question);

		parts.join("\n\n")
	}
}

/// Fill a file template carrying `{context}` and `{query}` placeholders. The
/// context goes in first and the query last, so a question that happens to
/// contain a placeholder token is never re-substituted.
pub fn fill_template(template: &str, rendered_context: &str, question_block: &str) -> String {
	template
		.replace(CONTEXT_PLACEHOLDER, rendered_context)
		.replace(QUERY_PLACEHOLDER, question_block)
}

/// The built-in system guidance, used whenever no template file is
/// configured. Carries the detected response-style hint.
pub fn builtin_guidance(style: ResponseStyle) -> String {
	format!(
		"You are a knowledgeable and friendly legal research assistant for Indian \
		criminal law. Answer using only the statutory passages provided below, \
		citing section numbers where they appear. Be accurate and precise; do not \
		speculate beyond the provided text. If the passages do not contain the \
		answer, say so honestly instead of guessing.\n\
		Detected response style: {}.",
		style.label()
	)
}
