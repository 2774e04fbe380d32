//! Location handling: the `highlight` query-parameter round-trip.
//!
//! The search surface attaches the active query to navigation targets; the
//! destination page reads it back and hands it to the highlight pass.

/// Name of the query parameter carrying the highlight term.
pub const HIGHLIGHT_PARAM: &str = "highlight";

/// A route location as reported by the host router: a path plus its raw
/// (still percent-encoded) query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    /// Splits `/docs/a?highlight=brix` into path and query parts.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: query.to_string(),
            },
            None => Self {
                path: raw.to_string(),
                query: String::new(),
            },
        }
    }

    /// The decoded highlight term, if present and readable. Malformed
    /// percent-encoding and blank values are treated as "nothing to
    /// highlight", never as an error.
    pub fn highlight_term(&self) -> Option<String> {
        for pair in self.query.split('&') {
            if let Some((key, value)) = pair.split_once('=')
                && key == HIGHLIGHT_PARAM
            {
                return urlencoding::decode(value)
                    .ok()
                    .map(std::borrow::Cow::into_owned)
                    .filter(|term| !term.trim().is_empty());
            }
        }
        None
    }
}

/// Builds the navigation target for `href`, attaching `query` as the
/// highlight parameter when it is non-empty.
pub fn target_with_highlight(href: &str, query: &str) -> String {
    if query.trim().is_empty() {
        href.to_string()
    } else {
        format!("{href}?{HIGHLIGHT_PARAM}={}", urlencoding::encode(query))
    }
}
