use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

/// Embed one query string via a feature-extraction endpoint.
///
/// The endpoint may return either a flat vector or a single-element batch
/// wrapping one; the result is flattened one level and every element coerced
/// to `f32` before it reaches the search client.
pub async fn embed(cfg: &statlex_config::EmbeddingProviderConfig, text: &str) -> Result<Vec<f32>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"inputs": text,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_embedding_response(json)
}

fn parse_embedding_response(json: Value) -> Result<Vec<f32>> {
	let outer = json
		.as_array()
		.ok_or_else(|| eyre::eyre!("Embedding response is not an array."))?;
	let values = match outer.first() {
		Some(Value::Array(inner)) => {
			if outer.len() != 1 {
				return Err(eyre::eyre!("Embedding response contains more than one vector."));
			}

			inner.as_slice()
		},
		_ => outer.as_slice(),
	};

	if values.is_empty() {
		return Err(eyre::eyre!("Embedding response is empty."));
	}

	let mut vec = Vec::with_capacity(values.len());
	for value in values {
		let number =
			value.as_f64().ok_or_else(|| eyre::eyre!("Embedding value must be numeric."))?;
		vec.push(number as f32);
	}

	Ok(vec)
}
