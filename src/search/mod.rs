//! Ranked free-text search over the documentation page set.
//!
//! Matching is plain substring containment: case-insensitive for ordinary
//! queries, exact and case-sensitive for symbol-only queries. A record's
//! score is the strongest weighted field signal, not a sum, so a perfect
//! match in one field outranks weak matches spread across several.

// Module declarations
pub(crate) mod engine;
pub(crate) mod query;
pub(crate) mod scoring;

// Public re-exports (used via lib.rs)
pub use engine::{RESULT_LIMIT, SearchEngine, SearchHit};
pub use query::TermMatcher;
