use serde::Serialize;

/// Presentation style inferred from the question wording. Used as a hint in
/// the prompt and to pick a decorative heading when the answer is displayed;
/// it has no effect on retrieval.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
	Summary,
	List,
	Comparison,
	Explanation,
	Definition,
	CaseRuling,
	LegalReference,
	CourtComposition,
	General,
}

/// Keyword sets checked in fixed priority order; the first matching category
/// wins.
const STYLE_RULES: &[(ResponseStyle, &[&str])] = &[
	(ResponseStyle::Summary, &["summary", "overview", "summarize"]),
	(ResponseStyle::List, &["list", "steps", "how to", "process"]),
	(ResponseStyle::Comparison, &["compare", "difference", "similar", "versus", "vs"]),
	(ResponseStyle::Explanation, &["why", "reason", "explain", "rationale"]),
	(ResponseStyle::Definition, &["what is", "define", "meaning", "concept"]),
	(ResponseStyle::CaseRuling, &["precedent", "ruling", "decision"]),
	(ResponseStyle::LegalReference, &["statute", "law", "regulation"]),
	(ResponseStyle::CourtComposition, &["judges", "justice", "bench"]),
];

pub fn classify(question: &str) -> ResponseStyle {
	let lower = question.to_lowercase();

	for (style, keywords) in STYLE_RULES {
		if keywords.iter().any(|keyword| lower.contains(keyword)) {
			return *style;
		}
	}

	ResponseStyle::General
}

impl ResponseStyle {
	/// Machine-readable label, matching the serde form. Attached to the
	/// prompt as the detected style hint.
	pub fn label(self) -> &'static str {
		match self {
			Self::Summary => "summary",
			Self::List => "list",
			Self::Comparison => "comparison",
			Self::Explanation => "explanation",
			Self::Definition => "definition",
			Self::CaseRuling => "case_ruling",
			Self::LegalReference => "legal_reference",
			Self::CourtComposition => "court_composition",
			Self::General => "general",
		}
	}

	/// Decorative section heading for displayed answers.
	pub fn heading(self) -> &'static str {
		match self {
			Self::Summary => "CASE SUMMARY",
			Self::List => "KEY POINTS",
			Self::Comparison => "CASE COMPARISON",
			Self::Explanation => "LEGAL EXPLANATION",
			Self::Definition => "LEGAL DEFINITION",
			Self::CaseRuling => "PRECEDENT & RULING",
			Self::LegalReference => "STATUTORY REFERENCE",
			Self::CourtComposition => "COURT & JUDGES",
			Self::General => "LEGAL INFORMATION",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{ResponseStyle, classify};

	#[test]
	fn first_matching_category_wins() {
		// "summarize" (summary) outranks "difference" (comparison).
		assert_eq!(
			classify("Summarize the difference between theft and robbery"),
			ResponseStyle::Summary
		);
		assert_eq!(classify("Why is the difference relevant?"), ResponseStyle::Comparison);
	}

	#[test]
	fn falls_back_to_general() {
		assert_eq!(classify("Penalties for forgery"), ResponseStyle::General);
	}

	#[test]
	fn serializes_to_snake_case() {
		let json = serde_json::to_string(&ResponseStyle::CaseRuling).expect("serialize");

		assert_eq!(json, "\"case_ruling\"");
	}
}
