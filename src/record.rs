//! Page records and the immutable index built from them.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A static description of one documentation page.
///
/// Records are fixed at startup from the navigation configuration and never
/// mutated afterwards. `href` is the identity key: the search surface keys
/// the recency list on it and the router navigates to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Display name shown in result lists and breadcrumbs.
    pub title: String,
    /// Unique navigation target.
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text tokens boosting recall, e.g. "setup onboarding".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Grouping label ("Production", "Compliance", ...).
    #[serde(default)]
    pub section: String,
    /// Body snippets searched independently of title and description.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,
}

/// The immutable, validated set of page records.
///
/// Construction enforces the `href` uniqueness invariant; afterwards the set
/// is read-only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct PageIndex {
    records: Vec<PageRecord>,
}

impl PageIndex {
    /// Validates the record set and builds the index.
    pub fn new(records: Vec<PageRecord>) -> Result<Self, IndexError> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.href.is_empty() {
                return Err(IndexError::EmptyHref(record.title.clone()));
            }
            if !seen.insert(record.href.clone()) {
                return Err(IndexError::DuplicateHref(record.href.clone()));
            }
        }
        Ok(Self { records })
    }

    /// All records, in configuration order. Ranking ties preserve this order.
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Looks up the record whose `href` equals a route path, used by the
    /// route-change hook to feed the recency list.
    pub fn find_by_path(&self, path: &str) -> Option<&PageRecord> {
        self.records.iter().find(|r| r.href == path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
