//! The fixed navigation configuration.
//!
//! Page records ship as an embedded TOML document, parsed once at startup.
//! The configuration also names the "suggested" pages shown by the search
//! surface before any query is typed or any page has been visited.

use crate::error::Result;
use crate::record::{PageIndex, PageRecord};
use anyhow::Context;
use serde::Deserialize;

static NAV_TOML: &str = include_str!("nav.toml");

#[derive(Debug, Deserialize)]
struct NavConfig {
    #[serde(default)]
    suggested: Vec<String>,
    pages: Vec<PageRecord>,
}

/// The parsed navigation set: the validated page index plus the resolved
/// suggested list.
#[derive(Debug)]
pub struct Navigation {
    pub index: PageIndex,
    pub suggested: Vec<PageRecord>,
}

/// Parses a navigation document. Suggested entries must name known hrefs.
pub fn parse(toml_source: &str) -> Result<Navigation> {
    let config: NavConfig =
        toml::from_str(toml_source).context("Failed to parse navigation configuration")?;
    let index = PageIndex::new(config.pages)?;

    let mut suggested = Vec::with_capacity(config.suggested.len());
    for href in &config.suggested {
        let record = index
            .find_by_path(href)
            .with_context(|| format!("Suggested page '{href}' is not in the navigation set"))?;
        suggested.push(record.clone());
    }

    Ok(Navigation { index, suggested })
}

/// The built-in documentation set.
pub fn load_default() -> Result<Navigation> {
    parse(NAV_TOML)
}
