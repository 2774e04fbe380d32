//! Query classification and term location.
//!
//! The [`TermMatcher`] is shared by field scoring and the highlight pass so
//! both agree on what counts as a match: symbol-only terms compare exactly
//! and case-sensitively, everything else compares case-insensitively.

use regex::Regex;
use std::sync::LazyLock;

/// Queries made up entirely of non-alphanumeric, non-whitespace characters.
/// ASCII classes on purpose: this is what the portal's search box treats as
/// a "symbol" query, so `"→"` qualifies while `"→a"` does not.
static SYMBOL_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^a-zA-Z0-9\s]+$").expect("static symbol-query pattern"));

/// Returns true when every character of `term` is a symbol.
pub(crate) fn is_symbol_only(term: &str) -> bool {
    SYMBOL_ONLY.is_match(term)
}

/// Locates occurrences of one search term inside field or node text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatcher {
    term: String,
    case_sensitive: bool,
}

impl TermMatcher {
    /// Builds a matcher for `term`, or `None` for empty and whitespace-only
    /// input (an empty term matches nothing, never everything).
    pub fn new(term: &str) -> Option<Self> {
        if term.trim().is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
            case_sensitive: is_symbol_only(term),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// First occurrence in `text` as a `(start, end)` byte range.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.find_from(text, 0)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// First occurrence at or after byte offset `from`.
    ///
    /// `from` must lie on a char boundary; offsets past the end return `None`.
    pub fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        let tail = text.get(from..)?;
        if self.case_sensitive {
            return tail
                .find(&self.term)
                .map(|i| (from + i, from + i + self.term.len()));
        }
        for (offset, _) in tail.char_indices() {
            if let Some(len) = fold_prefix_len(&tail[offset..], &self.term) {
                return Some((from + offset, from + offset + len));
            }
        }
        None
    }

    /// Every occurrence, scanning left to right and advancing one character
    /// past each match start so adjacent overlapping matches are seen. The
    /// returned ranges may therefore overlap; callers rebuilding text keep
    /// the first match of an overlapping run.
    pub fn occurrences(&self, text: &str) -> Vec<(usize, usize)> {
        let mut found = vec![];
        let mut from = 0;
        while let Some((start, end)) = self.find_from(text, from) {
            found.push((start, end));
            let step = text[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            from = start + step;
        }
        found
    }
}

/// Byte length of the prefix of `text` that case-folds equal to `needle`,
/// or `None` when `text` does not start with it.
fn fold_prefix_len(text: &str, needle: &str) -> Option<usize> {
    let mut text_chars = text.chars();
    let mut consumed = 0;
    for expected in needle.chars() {
        let actual = text_chars.next()?;
        if !chars_fold_eq(actual, expected) {
            return None;
        }
        consumed += actual.len_utf8();
    }
    Some(consumed)
}

fn chars_fold_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
