pub mod chat;
pub mod context;
mod error;
pub mod history;
pub mod partition;
pub mod prompt;
pub mod retrieve;

use std::{future::Future, pin::Pin, sync::Arc};

pub use chat::{Answer, ChatReply, ChatRequest};
pub use error::{
	EMPTY_QUERY_MESSAGE, Error, GENERATION_FAILURE_MESSAGE, RETRIEVAL_UNAVAILABLE_MESSAGE, Result,
};
pub use history::{ConversationStore, ConversationTurn, Role};
pub use partition::PartitionedMatches;

use statlex_config::{Config, EmbeddingProviderConfig, LlmProviderConfig};
use statlex_index::{CandidateMatch, QdrantStore};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>>;
}

pub trait SearchProvider
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		vector: Vec<f32>,
		top_k: u32,
		with_payload: bool,
	) -> BoxFuture<'a, color_eyre::Result<Vec<CandidateMatch>>>;
}

pub trait CompletionProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub search: Arc<dyn SearchProvider>,
	pub completion: Arc<dyn CompletionProvider>,
}

impl Providers {
	pub fn new(
		embedding: Arc<dyn EmbeddingProvider>,
		search: Arc<dyn SearchProvider>,
		completion: Arc<dyn CompletionProvider>,
	) -> Self {
		Self { embedding, search, completion }
	}

	/// Default HTTP providers with the given index as the search backend.
	pub fn with_store(store: Arc<QdrantStore>) -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { embedding: provider.clone(), search: store, completion: provider }
	}
}

pub struct StatlexService {
	pub cfg: Config,
	pub providers: Providers,
}

impl StatlexService {
	pub fn new(cfg: Config, store: Arc<QdrantStore>) -> Self {
		Self { providers: Providers::with_store(store), cfg }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>> {
		Box::pin(statlex_providers::embedding::embed(cfg, text))
	}
}

impl CompletionProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(statlex_providers::completion::complete(cfg, prompt))
	}
}

impl SearchProvider for QdrantStore {
	fn search<'a>(
		&'a self,
		vector: Vec<f32>,
		top_k: u32,
		with_payload: bool,
	) -> BoxFuture<'a, color_eyre::Result<Vec<CandidateMatch>>> {
		Box::pin(async move {
			QdrantStore::search(self, vector, top_k, with_payload)
				.await
				.map_err(color_eyre::Report::from)
		})
	}
}
