use statlex_domain::section::{self, SectionMatcher};

#[test]
fn section_query_yields_three_variants() {
	let plan = section::plan("What are the penalties under Section 103?");

	assert!(plan.is_section_query());
	assert_eq!(plan.queries.len(), 3);
	assert_eq!(plan.queries[0], "Section 103");
	assert_eq!(plan.queries[1], "103. ");
	assert_eq!(plan.queries[2], "section 103 provisions penalties procedure evidence");
}

#[test]
fn detection_is_case_insensitive_and_first_match_wins() {
	assert_eq!(section::detect_section("explain SECTION 420 please"), Some("420".to_string()));
	assert_eq!(
		section::detect_section("compare section 103 with section 104"),
		Some("103".to_string())
	);
	assert_eq!(section::detect_section("what is culpable homicide"), None);
}

#[test]
fn plain_query_passes_through_unchanged() {
	let plan = section::plan("what is culpable homicide");

	assert!(!plan.is_section_query());
	assert_eq!(plan.queries, vec!["what is culpable homicide".to_string()]);
}

#[test]
fn matcher_rejects_non_numeric_input() {
	assert!(SectionMatcher::new("").is_none());
	assert!(SectionMatcher::new("10a").is_none());
	assert!(SectionMatcher::new("103").is_some());
}

#[test]
fn boundary_matches_line_start_heading() {
	let matcher = SectionMatcher::new("103").expect("matcher");

	assert!(matcher.matches("preamble text\n103. Whoever commits murder shall be punished"));
	assert!(matcher.matches("103. Punishment for murder."));
	assert!(matcher.matches("  103. Whoever commits"));
}

#[test]
fn boundary_matches_inline_and_underscore_forms() {
	let matcher = SectionMatcher::new("103").expect("matcher");

	assert!(matcher.matches("as stated in clause (b) 103. Whoever"));
	assert!(matcher.matches("________ 103. Punishment for murder"));
	assert!(matcher.matches("offence under 103. the court may"));
}

#[test]
fn boundary_rejects_unrelated_passages() {
	let matcher = SectionMatcher::new("103").expect("matcher");

	assert!(!matcher.matches("Section numbering begins at 1."));
	assert!(!matcher.matches("a fine of 1030 rupees"));
	assert!(!matcher.matches("completely unrelated statutory text"));
}

#[test]
fn boundary_does_not_cross_digit_boundaries() {
	let matcher = SectionMatcher::new("10").expect("matcher");

	// "103. " must not satisfy the section-10 heading patterns.
	assert!(!matcher.matches("preamble\n103. Whoever commits murder"));
}
