//! In-page term highlighting over a generic document tree.
//!
//! One pass: clear markers left by a previous run, locate every occurrence
//! of the term in text nodes (skipping non-rendering elements), rebuild
//! matched runs as marker nodes, and hand scroll/pulse cues back to the
//! host. The pass never errors; a missing term or container is a no-op.

pub(crate) mod node;

pub use node::{Element, Node};

use crate::route::Location;
use crate::search::TermMatcher;
use std::time::Duration;

/// Delay before the host scrolls to the first marker, letting layout settle.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(100);
/// Lifetime of the transient pulse cue on the first marker.
pub const PULSE_DURATION: Duration = Duration::from_millis(1500);

/// Tags whose text never renders and is never highlighted.
const SKIPPED_TAGS: &[&str] = &["script", "style"];

/// Cue returned after a pass that produced markers: scroll the first
/// marker into centered view once `settle` elapses, then drop the pulse
/// after `pulse`. Both timers are fire-and-forget; the next pass simply
/// rebuilds the markers and the host discards stale cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCue {
    pub settle: Duration,
    pub pulse: Duration,
}

/// Result of one highlight pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightOutcome {
    /// Number of markers created.
    pub marks: usize,
    /// Present when at least one marker was created.
    pub scroll: Option<ScrollCue>,
}

/// Runs the pass for the term carried by `location`'s highlight parameter.
/// Missing or malformed terms leave the tree untouched.
pub fn highlight_from_location(root: &mut Element, location: &Location) -> HighlightOutcome {
    match location.highlight_term() {
        Some(term) => apply(root, &term),
        None => HighlightOutcome::default(),
    }
}

/// Clears stale markers and marks every occurrence of `term` under `root`.
pub fn apply(root: &mut Element, term: &str) -> HighlightOutcome {
    let Some(matcher) = TermMatcher::new(term) else {
        return HighlightOutcome::default();
    };

    // Unwrap first so repeated runs never nest markers.
    clear(root);
    let marks = mark_element(root, &matcher);
    tracing::debug!("highlighted {} occurrence(s) of '{}'", marks, term);

    HighlightOutcome {
        marks,
        scroll: (marks > 0).then_some(ScrollCue {
            settle: SCROLL_SETTLE,
            pulse: PULSE_DURATION,
        }),
    }
}

/// Unwraps all markers back to plain text and merges adjacent text runs,
/// restoring the container to its pre-highlight state. Also the cleanup
/// path when the term changes or the view is torn down.
pub fn clear(root: &mut Element) {
    for child in &mut root.children {
        match child {
            Node::Element(el) => clear(el),
            Node::Mark(text) => *child = Node::Text(std::mem::take(text)),
            Node::Text(_) => {}
        }
    }
    merge_text_runs(&mut root.children);
}

fn merge_text_runs(children: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        match (merged.last_mut(), child) {
            (Some(Node::Text(prev)), Node::Text(text)) => prev.push_str(&text),
            (_, child) => merged.push(child),
        }
    }
    *children = merged;
}

fn mark_element(el: &mut Element, matcher: &TermMatcher) -> usize {
    if SKIPPED_TAGS.contains(&el.tag.as_str()) {
        return 0;
    }

    let mut marks = 0;
    let mut rebuilt: Vec<Node> = Vec::with_capacity(el.children.len());
    for child in el.children.drain(..) {
        match child {
            Node::Element(mut inner) => {
                marks += mark_element(&mut inner, matcher);
                rebuilt.push(Node::Element(inner));
            }
            Node::Text(text) => marks += split_text(&text, matcher, &mut rebuilt),
            // Text already inside a marker is left alone.
            mark @ Node::Mark(_) => rebuilt.push(mark),
        }
    }
    el.children = rebuilt;
    marks
}

/// Rebuilds one text run as an interleaved sequence of text and marker
/// nodes. Returns the number of markers created.
fn split_text(text: &str, matcher: &TermMatcher, out: &mut Vec<Node>) -> usize {
    let occurrences = matcher.occurrences(text);
    if occurrences.is_empty() {
        out.push(Node::Text(text.to_string()));
        return 0;
    }

    let mut marks = 0;
    let mut cursor = 0;
    for (start, end) in occurrences {
        // Overlapping finds collapse to the first match of the run.
        if start < cursor {
            continue;
        }
        if start > cursor {
            out.push(Node::Text(text[cursor..start].to_string()));
        }
        out.push(Node::Mark(text[start..end].to_string()));
        marks += 1;
        cursor = end;
    }
    if cursor < text.len() {
        out.push(Node::Text(text[cursor..].to_string()));
    }
    marks
}
