use serde::{Deserialize, Serialize};

use statlex_domain::corpus::SourceLabel;

/// One retrieved statute passage. Identity is `id`, which is unique within a
/// single search call and is what cross-variant deduplication keys on. The
/// record lives for one retrieval episode only.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CandidateMatch {
	pub id: String,
	pub text: String,
	pub source: SourceLabel,
	pub score: f32,
}
