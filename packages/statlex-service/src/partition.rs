use statlex_domain::corpus::SourceLabel;
use statlex_index::CandidateMatch;

/// Candidates bucketed by statutory code, in the fixed rendering order.
/// Ranking order within a bucket is the retrieval order; nothing is
/// re-sorted. Unlabeled candidates are dropped here so they never reach the
/// model.
#[derive(Debug, Default)]
pub struct PartitionedMatches {
	pub bns: Vec<CandidateMatch>,
	pub bnss: Vec<CandidateMatch>,
	pub bsa: Vec<CandidateMatch>,
}

impl PartitionedMatches {
	pub fn partition(matches: Vec<CandidateMatch>) -> Self {
		let mut partitioned = Self::default();

		for candidate in matches {
			match candidate.source {
				SourceLabel::Bns => partitioned.bns.push(candidate),
				SourceLabel::Bnss => partitioned.bnss.push(candidate),
				SourceLabel::Bsa => partitioned.bsa.push(candidate),
				SourceLabel::Unknown => {},
			}
		}

		partitioned
	}

	/// The three buckets in fixed order, regardless of which have matches.
	pub fn buckets(&self) -> [(SourceLabel, &[CandidateMatch]); 3] {
		[
			(SourceLabel::Bns, self.bns.as_slice()),
			(SourceLabel::Bnss, self.bnss.as_slice()),
			(SourceLabel::Bsa, self.bsa.as_slice()),
		]
	}

	pub fn is_empty(&self) -> bool {
		self.bns.is_empty() && self.bnss.is_empty() && self.bsa.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn candidate(id: &str, source: SourceLabel) -> CandidateMatch {
		CandidateMatch {
			id: id.to_string(),
			text: format!("text {id}"),
			source,
			score: 0.5,
		}
	}

	#[test]
	fn partition_is_deterministic_and_order_preserving() {
		let input = vec![
			candidate("1", SourceLabel::Bnss),
			candidate("2", SourceLabel::Bns),
			candidate("3", SourceLabel::Bns),
			candidate("4", SourceLabel::Bsa),
		];
		let first = PartitionedMatches::partition(input.clone());
		let second = PartitionedMatches::partition(input);

		for (a, b) in first.buckets().iter().zip(second.buckets().iter()) {
			assert_eq!(a.0, b.0);
			let a_ids: Vec<&str> = a.1.iter().map(|m| m.id.as_str()).collect();
			let b_ids: Vec<&str> = b.1.iter().map(|m| m.id.as_str()).collect();
			assert_eq!(a_ids, b_ids);
		}
		assert_eq!(first.bns.len(), 2);
		assert_eq!(first.bns[0].id, "2");
		assert_eq!(first.bns[1].id, "3");
	}

	#[test]
	fn unlabeled_candidates_are_dropped() {
		let partitioned = PartitionedMatches::partition(vec![
			candidate("1", SourceLabel::Unknown),
			candidate("2", SourceLabel::Bsa),
		]);

		assert!(partitioned.bns.is_empty());
		assert!(partitioned.bnss.is_empty());
		assert_eq!(partitioned.bsa.len(), 1);
	}
}
