use std::collections::HashSet;

use color_eyre::eyre;
use futures::future::join_all;
use tracing::warn;

use crate::{Error, Result, StatlexService};
use statlex_domain::section::{self, SectionMatcher};
use statlex_index::CandidateMatch;

impl StatlexService {
	/// One retrieval episode: plan the query variants, fan the searches out,
	/// merge and dedup, and in section mode filter by the boundary
	/// heuristics with an unfiltered fallback slice.
	///
	/// A failed variant is skipped; the episode fails only when every
	/// variant failed.
	pub async fn retrieve(&self, query: &str) -> Result<Vec<CandidateMatch>> {
		let plan = section::plan(query);
		let top_k = if plan.is_section_query() {
			self.cfg.retrieval.section_top_k
		} else {
			self.cfg.retrieval.plain_top_k
		};

		// The searches run concurrently, but `join_all` yields outcomes in
		// variant order, which is what the first-seen merge keys on.
		let outcomes =
			join_all(plan.queries.iter().map(|variant| self.search_variant(variant, top_k))).await;
		let mut result_sets = Vec::with_capacity(outcomes.len());
		let mut failures = Vec::new();

		for (variant, outcome) in plan.queries.iter().zip(outcomes) {
			match outcome {
				Ok(matches) => result_sets.push(matches),
				Err(err) => {
					warn!(%variant, error = %err, "Search variant failed; continuing without it.");
					failures.push(format!("{variant}: {err}"));
				},
			}
		}

		if result_sets.is_empty() {
			return Err(Error::RetrievalUnavailable { message: failures.join("; ") });
		}

		let merged = merge_by_id(result_sets);

		match plan.section {
			Some(matcher) => Ok(filter_with_fallback(
				merged,
				&matcher,
				self.cfg.retrieval.fallback_limit as usize,
			)),
			None => Ok(merged),
		}
	}

	async fn search_variant(
		&self,
		variant: &str,
		top_k: u32,
	) -> color_eyre::Result<Vec<CandidateMatch>> {
		let vector = self.providers.embedding.embed(&self.cfg.providers.embedding, variant).await?;

		if vector.len() != self.cfg.storage.qdrant.vector_dim as usize {
			return Err(eyre::eyre!("Embedding vector dimension mismatch."));
		}

		self.providers.search.search(vector, top_k, true).await
	}
}

/// Merge the per-variant result sets preserving variant priority order, keeping
/// the first occurrence of each id.
pub(crate) fn merge_by_id(result_sets: Vec<Vec<CandidateMatch>>) -> Vec<CandidateMatch> {
	let mut merged = Vec::new();
	let mut seen = HashSet::new();

	for set in result_sets {
		for candidate in set {
			if seen.insert(candidate.id.clone()) {
				merged.push(candidate);
			}
		}
	}

	merged
}

/// Keep candidates whose text passes the section-boundary check. When the
/// heuristics match nothing, fall back to the leading slice of the unfiltered
/// merge; an episode never returns zero context just because a pattern missed.
pub(crate) fn filter_with_fallback(
	merged: Vec<CandidateMatch>,
	matcher: &SectionMatcher,
	fallback_limit: usize,
) -> Vec<CandidateMatch> {
	let filtered: Vec<CandidateMatch> =
		merged.iter().filter(|candidate| matcher.matches(&candidate.text)).cloned().collect();

	if filtered.is_empty() {
		let mut fallback = merged;

		fallback.truncate(fallback_limit);

		fallback
	} else {
		filtered
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use statlex_domain::corpus::SourceLabel;

	fn candidate(id: &str, text: &str) -> CandidateMatch {
		CandidateMatch {
			id: id.to_string(),
			text: text.to_string(),
			source: SourceLabel::Bns,
			score: 0.5,
		}
	}

	#[test]
	fn merge_dedupes_across_variants_first_seen_wins() {
		let merged = merge_by_id(vec![
			vec![candidate("a", "from variant one"), candidate("b", "also variant one")],
			vec![candidate("b", "variant two copy"), candidate("c", "variant two")],
		]);
		let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();

		assert_eq!(ids, vec!["a", "b", "c"]);
		assert_eq!(merged[1].text, "also variant one");
	}

	#[test]
	fn filter_keeps_only_boundary_matches() {
		let matcher = SectionMatcher::new("103").expect("matcher");
		let merged = vec![
			candidate("a", "unrelated commentary"),
			candidate("b", "preface\n103. Whoever commits murder"),
			candidate("c", "still unrelated"),
		];
		let kept = filter_with_fallback(merged, &matcher, 50);

		assert_eq!(kept.len(), 1);
		assert_eq!(kept[0].id, "b");
	}

	#[test]
	fn empty_filter_falls_back_to_leading_slice() {
		let matcher = SectionMatcher::new("999").expect("matcher");
		let merged: Vec<CandidateMatch> =
			(0..80).map(|i| candidate(&i.to_string(), "no boundary here")).collect();
		let kept = filter_with_fallback(merged.clone(), &matcher, 50);

		assert_eq!(kept.len(), 50);
		for (kept, original) in kept.iter().zip(merged.iter()) {
			assert_eq!(kept.id, original.id);
		}
	}
}
