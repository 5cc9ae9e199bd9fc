use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
http_bind = "127.0.0.1:8000"
log_level = "info"

[storage.qdrant]
url        = "http://127.0.0.1:6334"
collection = "statlex_chunks"
vector_dim = 384

[providers.embedding]
provider_id = "test"
api_base    = "http://127.0.0.1:1"
api_key     = "test-key"
path        = "/embed"
model       = "test-embedding"
dimensions  = 384
timeout_ms  = 1000

[providers.llm]
provider_id       = "test"
api_base          = "http://127.0.0.1:1"
api_key           = "test-key"
path              = "/chat/completions"
model             = "test-llm"
temperature       = 0.1
max_output_tokens = 1800
timeout_ms        = 1000

[retrieval]
section_top_k  = 200
plain_top_k    = 50
fallback_limit = 50

[context]
scenario_chunk_budget = 15
default_chunk_budget  = 10
history_window        = 16
"#;

fn sample_with<F>(mutate: F) -> String
where
	F: FnOnce(&mut toml::Table),
{
	let mut value: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("statlex_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_sample(payload: String) -> statlex_config::Result<statlex_config::Config> {
	let path = write_temp_config(payload);
	let result = statlex_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

#[test]
fn loads_sample_config() {
	let cfg = load_sample(SAMPLE_CONFIG_TOML.to_string()).expect("Expected sample to load.");

	assert_eq!(cfg.retrieval.section_top_k, 200);
	assert_eq!(cfg.context.history_window, 16);
	assert!(cfg.prompt.template_path.is_none());
	assert!(cfg.history.path.is_none());
}

#[test]
fn rejects_dimension_mismatch() {
	let payload = sample_with(|root| {
		let storage = root.get_mut("storage").and_then(Value::as_table_mut).expect("storage");
		let qdrant = storage.get_mut("qdrant").and_then(Value::as_table_mut).expect("qdrant");

		qdrant.insert("vector_dim".to_string(), Value::Integer(768));
	});
	let err = load_sample(payload).expect_err("Expected dimension validation error.");

	assert!(err.to_string().contains("must match storage.qdrant.vector_dim"));
}

#[test]
fn rejects_zero_chunk_budget() {
	let payload = sample_with(|root| {
		let context = root.get_mut("context").and_then(Value::as_table_mut).expect("context");

		context.insert("default_chunk_budget".to_string(), Value::Integer(0));
	});
	let err = load_sample(payload).expect_err("Expected chunk budget validation error.");

	assert!(err.to_string().contains("context.default_chunk_budget"));
}

#[test]
fn rejects_empty_api_key() {
	let payload = sample_with(|root| {
		let providers = root.get_mut("providers").and_then(Value::as_table_mut).expect("providers");
		let llm = providers.get_mut("llm").and_then(Value::as_table_mut).expect("llm");

		llm.insert("api_key".to_string(), Value::String("  ".to_string()));
	});
	let err = load_sample(payload).expect_err("Expected api_key validation error.");

	assert!(err.to_string().contains("llm api_key"));
}

#[test]
fn normalizes_blank_optional_paths() {
	let payload = sample_with(|root| {
		let mut prompt = toml::Table::new();

		prompt.insert("template_path".to_string(), Value::String("   ".to_string()));
		root.insert("prompt".to_string(), Value::Table(prompt));

		let mut history = toml::Table::new();

		history.insert("path".to_string(), Value::String("".to_string()));
		root.insert("history".to_string(), Value::Table(history));
	});
	let cfg = load_sample(payload).expect("Expected sample to load.");

	assert!(cfg.prompt.template_path.is_none());
	assert!(cfg.history.path.is_none());
}
