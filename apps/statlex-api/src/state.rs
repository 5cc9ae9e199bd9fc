use std::sync::Arc;

use statlex_index::QdrantStore;
use statlex_service::StatlexService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<StatlexService>,
	/// Kept alongside the service so `/health` can query collection stats
	/// directly.
	pub store: Arc<QdrantStore>,
	pub embedding_model: String,
	pub llm_model: String,
}
impl AppState {
	pub fn new(config: statlex_config::Config) -> color_eyre::Result<Self> {
		let store = Arc::new(QdrantStore::new(&config.storage.qdrant)?);
		let embedding_model = config.providers.embedding.model.clone();
		let llm_model = config.providers.llm.model.clone();
		let service = StatlexService::new(config, store.clone());

		Ok(Self { service: Arc::new(service), store, embedding_model, llm_model })
	}
}
