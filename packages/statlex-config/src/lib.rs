mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, Context, EmbeddingProviderConfig, History, LlmProviderConfig, Prompt, Providers, Qdrant,
	Retrieval, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.qdrant.collection.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.qdrant.collection must be non-empty.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions != cfg.storage.qdrant.vector_dim {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must match storage.qdrant.vector_dim."
				.to_string(),
		});
	}
	if cfg.retrieval.section_top_k == 0 {
		return Err(Error::Validation {
			message: "retrieval.section_top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.retrieval.plain_top_k == 0 {
		return Err(Error::Validation {
			message: "retrieval.plain_top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.retrieval.fallback_limit == 0 {
		return Err(Error::Validation {
			message: "retrieval.fallback_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.context.scenario_chunk_budget == 0 {
		return Err(Error::Validation {
			message: "context.scenario_chunk_budget must be greater than zero.".to_string(),
		});
	}
	if cfg.context.default_chunk_budget == 0 {
		return Err(Error::Validation {
			message: "context.default_chunk_budget must be greater than zero.".to_string(),
		});
	}
	if cfg.context.history_window == 0 {
		return Err(Error::Validation {
			message: "context.history_window must be greater than zero.".to_string(),
		});
	}

	for (label, key) in
		[("embedding", &cfg.providers.embedding.api_key), ("llm", &cfg.providers.llm.api_key)]
	{
		if key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_key must be non-empty."),
			});
		}
	}

	if !cfg.providers.llm.temperature.is_finite() || cfg.providers.llm.temperature < 0.0 {
		return Err(Error::Validation {
			message: "providers.llm.temperature must be zero or greater.".to_string(),
		});
	}
	if cfg.providers.llm.max_output_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.llm.max_output_tokens must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.prompt.template_path.as_deref().map(|path| path.trim().is_empty()).unwrap_or(false) {
		cfg.prompt.template_path = None;
	}
	if cfg.history.path.as_deref().map(|path| path.trim().is_empty()).unwrap_or(false) {
		cfg.history.path = None;
	}
}
