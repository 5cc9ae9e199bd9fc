use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	pub retrieval: Retrieval,
	pub context: Context,
	#[serde(default)]
	pub prompt: Prompt,
	#[serde(default)]
	pub history: History,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub qdrant: Qdrant,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	pub collection: String,
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub llm: LlmProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub max_output_tokens: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

/// Per-variant search depth and the filter fallback slice.
#[derive(Debug, Deserialize)]
pub struct Retrieval {
	/// Result count requested per query variant when a section number was
	/// detected; the boundary filter narrows these afterwards.
	pub section_top_k: u32,
	/// Result count for plain queries, which skip the boundary filter.
	pub plain_top_k: u32,
	/// How many merged candidates to keep when the boundary filter matches
	/// nothing.
	pub fallback_limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct Context {
	pub scenario_chunk_budget: u32,
	pub default_chunk_budget: u32,
	/// Number of most-recent conversation turns rendered into the prompt.
	pub history_window: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Prompt {
	/// Optional template file with `{context}` and `{query}` placeholders.
	/// When absent the builtin guidance is used.
	pub template_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct History {
	/// Conversation log location for the assistant app. The API keeps no
	/// server-side history.
	pub path: Option<String>,
}
