use qdrant_client::qdrant::{
	Query, QueryPointsBuilder, ScoredPoint, point_id::PointIdOptions, value::Kind,
};
use tracing::warn;

use crate::{CandidateMatch, Result};
use statlex_domain::corpus::SourceLabel;

pub const TEXT_PAYLOAD_KEY: &str = "text";
pub const SOURCE_PAYLOAD_KEY: &str = "source";

#[derive(Clone, Copy, Debug)]
pub struct IndexStats {
	pub total_vectors: u64,
}

pub struct QdrantStore {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
	pub vector_dim: u32,
}
impl QdrantStore {
	pub fn new(cfg: &statlex_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self { client, collection: cfg.collection.clone(), vector_dim: cfg.vector_dim })
	}

	/// One nearest-neighbour lookup. Ranking order comes from the index and
	/// is preserved; points without the expected payload are skipped with a
	/// warning instead of failing the call.
	pub async fn search(
		&self,
		vector: Vec<f32>,
		top_k: u32,
		with_payload: bool,
	) -> Result<Vec<CandidateMatch>> {
		let request = QueryPointsBuilder::new(self.collection.clone())
			.query(Query::new_nearest(vector))
			.limit(u64::from(top_k))
			.with_payload(with_payload);
		let response = self.client.query(request).await?;
		let mut matches = Vec::with_capacity(response.result.len());

		for point in response.result {
			match candidate_from_point(point) {
				Some(candidate) => matches.push(candidate),
				None => warn!("Skipping a search result without id or text payload."),
			}
		}

		Ok(matches)
	}

	pub async fn stats(&self) -> Result<IndexStats> {
		let info = self.client.collection_info(&self.collection).await?;
		let total_vectors =
			info.result.as_ref().and_then(|result| result.points_count).unwrap_or(0);

		Ok(IndexStats { total_vectors })
	}
}

fn candidate_from_point(point: ScoredPoint) -> Option<CandidateMatch> {
	let id = match point.id.as_ref()?.point_id_options.as_ref()? {
		PointIdOptions::Uuid(id) => id.clone(),
		PointIdOptions::Num(id) => id.to_string(),
	};
	let text = payload_str(&point, TEXT_PAYLOAD_KEY)?.to_string();
	let source = payload_str(&point, SOURCE_PAYLOAD_KEY)
		.map(SourceLabel::parse)
		.unwrap_or(SourceLabel::Unknown);

	Some(CandidateMatch { id, text, source, score: point.score })
}

fn payload_str<'a>(point: &'a ScoredPoint, key: &str) -> Option<&'a str> {
	match point.payload.get(key)?.kind.as_ref()? {
		Kind::StringValue(value) => Some(value.as_str()),
		_ => None,
	}
}
