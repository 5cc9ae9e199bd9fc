use axum::{
	Json, Router,
	extract::State,
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use statlex_service::{ChatReply, ChatRequest};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(root))
		.route("/health", get(health))
		.route("/chat", post(chat))
		.with_state(state)
}

#[derive(Debug, Serialize)]
struct StatusBody {
	service: &'static str,
	status: &'static str,
	version: &'static str,
}

async fn root() -> Json<StatusBody> {
	Json(StatusBody { service: "statlex-api", status: "active", version: statlex_cli::VERSION })
}

#[derive(Debug, Serialize)]
struct HealthBody {
	status: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	total_vectors: Option<u64>,
	embedding_model: String,
	llm_model: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	detail: Option<String>,
}

/// Index connectivity check. A failing stats call reports `degraded` instead
/// of an HTTP error so monitors always get a readable body.
async fn health(State(state): State<AppState>) -> Json<HealthBody> {
	let (status, total_vectors, detail) = match state.store.stats().await {
		Ok(stats) => ("ok", Some(stats.total_vectors), None),
		Err(err) => ("degraded", None, Some(err.to_string())),
	};

	Json(HealthBody {
		status,
		total_vectors,
		embedding_model: state.embedding_model.clone(),
		llm_model: state.llm_model.clone(),
		detail,
	})
}

/// One stateless chat exchange; callers supply their own history. Pipeline
/// failures are carried in the reply body, so the route itself always
/// answers 200.
async fn chat(State(state): State<AppState>, Json(payload): Json<ChatRequest>) -> Json<ChatReply> {
	Json(state.service.chat(&payload).await)
}
