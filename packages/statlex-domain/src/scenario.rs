/// Indicators of a hypothetical or conditional legal question. Matched as
/// case-insensitive substrings, so short entries like "if" also fire inside
/// longer words; that over-triggering only widens the chunk budget and is
/// accepted.
const SCENARIO_INDICATORS: &[&str] = &[
	"if",
	"can i",
	"what happens",
	"should i",
	"is it legal",
	"do i have to",
	"someone",
	"a person",
	"what if",
	"suppose",
	"scenario",
	"case",
	"situation",
];

/// Scenario questions get a larger per-source chunk budget; hypothetical
/// reasoning tends to need broader statutory coverage.
pub fn is_scenario(query: &str) -> bool {
	let lower = query.to_lowercase();

	SCENARIO_INDICATORS.iter().any(|indicator| lower.contains(indicator))
}

#[cfg(test)]
mod tests {
	use super::is_scenario;

	#[test]
	fn detects_hypothetical_phrasing() {
		assert!(is_scenario("What if someone refuses to testify?"));
		assert!(is_scenario("Can I appeal a conviction?"));
		assert!(is_scenario("SUPPOSE a person steals a car"));
	}

	#[test]
	fn plain_lookups_are_not_scenarios() {
		assert!(!is_scenario("Summarize Section 300"));
		assert!(!is_scenario("Meaning of abetment"));
	}
}
