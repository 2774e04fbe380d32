//! Shared fixtures for integration tests.
//!
//! `docs_index()` is a small but realistic slice of the portal navigation
//! set; `scenario_index()` is the minimal two-record set used by the
//! end-to-end ranking checks. Surfaces built here use the in-memory store
//! so tests never touch the real data directory.

use rstest::fixture;
use vinedocs::recent::MemoryStore;
use vinedocs::record::{PageIndex, PageRecord};
use vinedocs::search::SearchEngine;
use vinedocs::surface::SearchSurface;

/// Builds a bare record with only title and href set.
#[allow(dead_code)] // Used across different integration test crates
pub fn page(title: &str, href: &str) -> PageRecord {
    PageRecord {
        title: title.to_string(),
        href: href.to_string(),
        description: None,
        keywords: None,
        section: String::new(),
        content: vec![],
    }
}

/// A small slice of the documentation set with all field kinds populated.
#[allow(dead_code)]
pub fn docs_index() -> PageIndex {
    PageIndex::new(vec![
        PageRecord {
            title: "Quick Start".to_string(),
            href: "/docs/quick-start".to_string(),
            description: Some("Set up your winery and invite your team".to_string()),
            keywords: Some("setup onboarding".to_string()),
            section: "Getting Started".to_string(),
            content: vec!["Create your winery profile".to_string()],
        },
        PageRecord {
            title: "Vessels & Transfers".to_string(),
            href: "/docs/vessels".to_string(),
            description: Some("Manage tanks and barrels".to_string()),
            keywords: Some("tank barrel transfer".to_string()),
            section: "Production".to_string(),
            content: vec!["Press → Tank movements record volume and loss".to_string()],
        },
        PageRecord {
            title: "Fermentation Tracking".to_string(),
            href: "/docs/fermentation".to_string(),
            description: Some("Daily fermentation curves".to_string()),
            keywords: Some("brix temperature punchdown".to_string()),
            section: "Production".to_string(),
            content: vec!["Log brix and temperature readings per vessel".to_string()],
        },
        PageRecord {
            title: "TTB Excise Reporting".to_string(),
            href: "/docs/ttb-excise".to_string(),
            description: Some("Log excise-tax transactions".to_string()),
            keywords: Some("ttb excise compliance".to_string()),
            section: "Compliance".to_string(),
            content: vec!["The 5120.17 report reconciles bonded wine".to_string()],
        },
    ])
    .expect("fixture index is valid")
}

/// The two-record set from the ranking acceptance scenarios.
#[allow(dead_code)]
pub fn scenario_index() -> PageIndex {
    PageIndex::new(vec![
        PageRecord {
            title: "Quick Start".to_string(),
            href: "/docs/a".to_string(),
            description: None,
            keywords: Some("setup onboarding".to_string()),
            section: String::new(),
            content: vec![],
        },
        PageRecord {
            title: "Irrigation".to_string(),
            href: "/docs/b".to_string(),
            description: None,
            keywords: None,
            section: String::new(),
            content: vec!["Track ET and rainfall".to_string()],
        },
    ])
    .expect("fixture index is valid")
}

/// Suggested pages shown before any visit has been recorded.
#[allow(dead_code)]
pub fn suggested() -> Vec<PageRecord> {
    vec![
        page("Quick Start", "/docs/quick-start"),
        page("TTB Excise Reporting", "/docs/ttb-excise"),
    ]
}

/// A surface over `docs_index()` with an in-memory store and the fixture
/// suggested list.
#[fixture]
#[allow(dead_code)]
pub fn surface() -> SearchSurface<MemoryStore> {
    SearchSurface::new(
        SearchEngine::new(docs_index()),
        MemoryStore::new(),
        suggested(),
    )
}
