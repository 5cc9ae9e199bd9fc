pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fixed response for empty or whitespace-only questions. Not an error; the
/// reply carries `error = false`.
pub const EMPTY_QUERY_MESSAGE: &str = "Please provide a valid question.";
/// Shown when every query variant failed to retrieve. Raw provider errors
/// never reach the user; they travel in the diagnostic details instead.
pub const RETRIEVAL_UNAVAILABLE_MESSAGE: &str =
	"The statute index is currently unavailable. Please try again in a moment.";
/// Shown when the language model call failed.
pub const GENERATION_FAILURE_MESSAGE: &str =
	"An error occurred while processing your request. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Retrieval failed for every query variant: {message}")]
	RetrievalUnavailable { message: String },
	#[error("Generation failed: {message}")]
	Generation { message: String },
}

impl Error {
	/// The generic user-facing message for this failure class.
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::RetrievalUnavailable { .. } => RETRIEVAL_UNAVAILABLE_MESSAGE,
			Self::Generation { .. } => GENERATION_FAILURE_MESSAGE,
		}
	}
}
