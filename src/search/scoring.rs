//! Field relevance scoring for ranked search.
//!
//! Each field scores positionally (100 at offset 0, 50 elsewhere, 0 when
//! absent) and carries a fixed weight. A record's overall score is the
//! maximum of its weighted field scores: the single strongest signal wins.

use super::query::TermMatcher;
use crate::record::PageRecord;

/// Positional score when the term sits at offset 0 of a field.
pub(crate) const SCORE_PREFIX: f32 = 100.0;
/// Positional score when the term occurs anywhere else in a field.
pub(crate) const SCORE_CONTAINS: f32 = 50.0;

const WEIGHT_TITLE: f32 = 1.0;
const WEIGHT_CONTENT: f32 = 0.95;
const WEIGHT_DESCRIPTION: f32 = 0.8;
const WEIGHT_KEYWORDS: f32 = 0.7;
const WEIGHT_SECTION: f32 = 0.5;

/// A record's relevance for one query, plus the snippet that earned it.
#[derive(Debug, Clone)]
pub(crate) struct RecordScore {
    pub(crate) score: f32,
    /// Best-matching content snippet, falling back to the description.
    pub(crate) snippet: Option<String>,
}

/// Positional score for one field. Empty fields score 0 and never panic.
fn field_score(text: &str, matcher: &TermMatcher) -> f32 {
    match matcher.find(text) {
        Some((0, _)) => SCORE_PREFIX,
        Some(_) => SCORE_CONTAINS,
        None => 0.0,
    }
}

/// Scores one record against the query term.
pub(crate) fn score_record(record: &PageRecord, matcher: &TermMatcher) -> RecordScore {
    let title = field_score(&record.title, matcher) * WEIGHT_TITLE;
    let description = record
        .description
        .as_deref()
        .map_or(0.0, |text| field_score(text, matcher))
        * WEIGHT_DESCRIPTION;
    let keywords = record
        .keywords
        .as_deref()
        .map_or(0.0, |text| field_score(text, matcher))
        * WEIGHT_KEYWORDS;
    let section = field_score(&record.section, matcher) * WEIGHT_SECTION;

    // The content field scores as its best snippet; that snippet is also
    // the one shown in result lists.
    let mut best_snippet: Option<&str> = None;
    let mut content_position = 0.0_f32;
    for snippet in &record.content {
        let positional = field_score(snippet, matcher);
        if positional > content_position {
            content_position = positional;
            best_snippet = Some(snippet);
        }
    }
    let content = content_position * WEIGHT_CONTENT;

    let score = [title, description, content, keywords, section]
        .into_iter()
        .fold(0.0_f32, f32::max);

    let snippet = best_snippet
        .map(str::to_string)
        .or_else(|| record.description.clone());

    RecordScore { score, snippet }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn record() -> PageRecord {
        PageRecord {
            title: "Fermentation Tracking".to_string(),
            href: "/docs/fermentation".to_string(),
            description: Some("Daily brix and temperature curves".to_string()),
            keywords: Some("punchdown cap management".to_string()),
            section: "Production".to_string(),
            content: vec![
                "Log punchdowns and pumpovers per vessel".to_string(),
                "Brix readings chart automatically".to_string(),
            ],
        }
    }

    fn matcher(term: &str) -> TermMatcher {
        TermMatcher::new(term).unwrap()
    }

    #[rstest]
    #[case("Fermentation", 100.0)] // title prefix, weight 1.0
    #[case("Tracking", 50.0)] // title interior
    #[case("Daily", 80.0)] // description prefix, weight 0.8
    #[case("punchdown", 70.0)] // keywords prefix beats content interior
    #[case("Production", 50.0)] // section prefix, weight 0.5
    #[case("Brix readings", 95.0)] // content prefix, weight 0.95
    #[case("pumpovers", 47.5)] // content interior
    fn strongest_weighted_field_wins(#[case] term: &str, #[case] expected: f32) {
        let scored = score_record(&record(), &matcher(term));
        check!((scored.score - expected).abs() < 1e-3);
    }

    #[test]
    fn absent_term_scores_zero() {
        let scored = score_record(&record(), &matcher("racking"));
        check!(scored.score == 0.0);
    }

    #[test]
    fn scores_stay_within_bounds() {
        for term in ["Fermentation", "vessel", "brix", "cap", "nothing here"] {
            let scored = score_record(&record(), &matcher(term));
            check!(scored.score >= 0.0);
            check!(scored.score <= 100.0);
        }
    }

    #[test]
    fn empty_fields_never_panic() {
        let bare = PageRecord {
            title: String::new(),
            href: "/docs/bare".to_string(),
            description: None,
            keywords: None,
            section: String::new(),
            content: vec![],
        };
        let scored = score_record(&bare, &matcher("anything"));
        check!(scored.score == 0.0);
        check!(scored.snippet.is_none());
    }

    #[test]
    fn snippet_prefers_best_content_match() {
        let scored = score_record(&record(), &matcher("Brix"));
        check!(scored.snippet.as_deref() == Some("Brix readings chart automatically"));
    }

    #[test]
    fn snippet_falls_back_to_description() {
        let scored = score_record(&record(), &matcher("Fermentation"));
        check!(scored.snippet.as_deref() == Some("Daily brix and temperature curves"));
    }
}
