use regex::Regex;

/// Generic statutory vocabulary appended to the natural-language query
/// variant; it pulls the embedding towards operative statute text instead of
/// tables of contents.
const SECTION_VOCAB: &str = "provisions penalties procedure evidence";

/// The retrieval queries for one user question: the original query alone, or
/// three diversified variants when a section number was detected.
#[derive(Debug)]
pub struct QueryPlan {
	pub queries: Vec<String>,
	pub section: Option<SectionMatcher>,
}

impl QueryPlan {
	pub fn is_section_query(&self) -> bool {
		self.section.is_some()
	}
}

/// Plan the retrieval queries for a raw user question. Always yields 1 or 3
/// query strings; never fails.
pub fn plan(query: &str) -> QueryPlan {
	let Some(matcher) = detect_section(query).and_then(|number| SectionMatcher::new(&number))
	else {
		return QueryPlan { queries: vec![query.to_string()], section: None };
	};

	QueryPlan { queries: matcher.query_variants(), section: Some(matcher) }
}

/// First "section <digits>" reference in the query, case-insensitive.
/// Multiple section numbers in one question are not supported; the first one
/// wins.
pub fn detect_section(query: &str) -> Option<String> {
	let re = Regex::new(r"(?i)section\s+(\d+)").ok()?;

	Some(re.captures(query)?.get(1)?.as_str().to_string())
}

/// Section-boundary heuristics for one section number. Embedding similarity
/// is unreliable for numeric identifiers, so retrieved passages are checked
/// against an ordered set of patterns that approximate how section headings
/// appear in the extracted statute text.
#[derive(Debug)]
pub struct SectionMatcher {
	number: String,
	patterns: Vec<Regex>,
	needles: Vec<String>,
}

impl SectionMatcher {
	pub fn new(number: &str) -> Option<Self> {
		if number.is_empty() || !number.bytes().all(|byte| byte.is_ascii_digit()) {
			return None;
		}

		let sources = [
			// A heading at a line start, possibly indented.
			format!(r"(?m)(^|\n)\s*{number}\.\s+"),
			// A heading immediately followed by the section's first word.
			format!(r"(?m)(^|\n){number}\.\s+[A-Z]"),
			// The number glued to the tail of the previous sentence.
			format!(r"[a-zA-Z]\s*{number}\."),
			// Underscore-ruled layouts produced by PDF extraction.
			format!(r"_+\s*{number}\.\s+"),
		];
		let patterns = sources
			.iter()
			.map(|source| Regex::new(source))
			.collect::<Result<Vec<_>, _>>()
			.ok()?;
		let needles = vec![
			format!("\n{number}. "),
			format!(" {number}. the "),
			format!(" {number}. whoever"),
			format!("_{number}. "),
		];

		Some(Self { number: number.to_string(), patterns, needles })
	}

	pub fn number(&self) -> &str {
		&self.number
	}

	pub fn query_variants(&self) -> Vec<String> {
		vec![
			format!("Section {}", self.number),
			format!("{}. ", self.number),
			format!("section {} {SECTION_VOCAB}", self.number),
		]
	}

	/// Whether the passage plausibly contains this section's boundary. A
	/// single hit from any pattern passes; the regex checks run against the
	/// raw text, the substring checks against its lowercase form.
	pub fn matches(&self, text: &str) -> bool {
		if self.patterns.iter().any(|pattern| pattern.is_match(text)) {
			return true;
		}

		let lower = text.to_lowercase();

		self.needles.iter().any(|needle| lower.contains(needle))
	}
}
