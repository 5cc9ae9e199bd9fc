use crate::partition::PartitionedMatches;
use statlex_domain::scenario;

/// Per-source passage budget for one request. Scenario questions get the
/// larger budget; classification happens once per query.
pub fn chunk_budget(cfg: &statlex_config::Context, query: &str) -> usize {
	if scenario::is_scenario(query) {
		cfg.scenario_chunk_budget as usize
	} else {
		cfg.default_chunk_budget as usize
	}
}

/// Render the labeled context block: one `=== heading ===` section per
/// source with matches, in fixed corpus order, each holding up to `budget`
/// leading passages joined by blank lines. Empty buckets render nothing, not
/// even their header.
pub fn assemble(partitioned: &PartitionedMatches, budget: usize) -> String {
	let mut sections = Vec::new();

	for (label, matches) in partitioned.buckets() {
		if matches.is_empty() {
			continue;
		}
		let Some(heading) = label.heading() else {
			continue;
		};

		let texts: Vec<&str> =
			matches.iter().take(budget).map(|candidate| candidate.text.as_str()).collect();

		sections.push(format!("=== {heading} ===\n{}", texts.join("\n\n")));
	}

	sections.join("\n\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use statlex_domain::corpus::SourceLabel;
	use statlex_index::CandidateMatch;

	fn candidate(id: usize, source: SourceLabel) -> CandidateMatch {
		CandidateMatch {
			id: id.to_string(),
			text: format!("passage {id}"),
			source,
			score: 0.5,
		}
	}

	fn test_context() -> statlex_config::Context {
		statlex_config::Context {
			scenario_chunk_budget: 15,
			default_chunk_budget: 10,
			history_window: 16,
		}
	}

	#[test]
	fn scenario_queries_use_larger_budget() {
		let cfg = test_context();

		assert_eq!(chunk_budget(&cfg, "what if my neighbour trespasses"), 15);
		assert_eq!(chunk_budget(&cfg, "WHAT IF my neighbour trespasses"), 15);
		assert_eq!(chunk_budget(&cfg, "summarize theft provisions"), 10);
	}

	#[test]
	fn budget_caps_each_bucket() {
		let matches: Vec<CandidateMatch> =
			(0..20).map(|i| candidate(i, SourceLabel::Bns)).collect();
		let partitioned = PartitionedMatches::partition(matches);
		let rendered = assemble(&partitioned, 10);

		assert!(rendered.contains("passage 9"));
		assert!(!rendered.contains("passage 10"));
	}

	#[test]
	fn empty_buckets_render_no_header() {
		let partitioned = PartitionedMatches::partition(vec![
			candidate(1, SourceLabel::Bns),
			candidate(2, SourceLabel::Bnss),
		]);
		let rendered = assemble(&partitioned, 10);

		assert!(rendered.contains("=== BNS (Bharatiya Nyaya Sanhita - Substantive Criminal Law) ==="));
		assert!(rendered.contains("=== BNSS (Bharatiya Nagarik Suraksha Sanhita - Criminal Procedure) ==="));
		assert!(!rendered.contains("BSA"));
	}

	#[test]
	fn section_order_is_fixed() {
		let partitioned = PartitionedMatches::partition(vec![
			candidate(1, SourceLabel::Bsa),
			candidate(2, SourceLabel::Bns),
		]);
		let rendered = assemble(&partitioned, 10);
		let bns_at = rendered.find("=== BNS ").expect("BNS section");
		let bsa_at = rendered.find("=== BSA ").expect("BSA section");

		assert!(bns_at < bsa_at);
	}
}
