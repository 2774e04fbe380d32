//! The ranking pipeline: score every record, sort, truncate.

use super::query::TermMatcher;
use super::scoring::score_record;
use crate::record::{PageIndex, PageRecord};

/// Maximum number of ranked results returned for one query.
pub const RESULT_LIMIT: usize = 10;

/// A ranked result: one page record with its relevance score and the
/// snippet chosen for display. Recomputed per keystroke, never persisted.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub record: PageRecord,
    pub score: f32,
    pub snippet: Option<String>,
}

/// Scores and ranks the fixed record set for free-text queries.
///
/// The engine is side-effect-free: the host calls [`SearchEngine::search`]
/// whenever the query changes and renders whatever comes back.
#[derive(Debug)]
pub struct SearchEngine {
    index: PageIndex,
}

impl SearchEngine {
    pub fn new(index: PageIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    /// Ranks the record set against `query`, best match first, capped at
    /// [`RESULT_LIMIT`]. Ties keep configuration order (the sort is stable).
    /// Empty and whitespace-only queries produce no results; the caller
    /// falls back to the recency or suggested list.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.search_limited(query, RESULT_LIMIT)
    }

    /// Like [`SearchEngine::search`] with an explicit result cap, for hosts
    /// that want more or fewer than the surface's default.
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let Some(matcher) = TermMatcher::new(query) else {
            return vec![];
        };

        let mut hits: Vec<SearchHit> = self
            .index
            .records()
            .iter()
            .filter_map(|record| {
                let scored = score_record(record, &matcher);
                (scored.score > 0.0).then(|| SearchHit {
                    record: record.clone(),
                    score: scored.score,
                    snippet: scored.snippet,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit);

        tracing::debug!("query '{}' matched {} records", query, hits.len());
        hits
    }
}
