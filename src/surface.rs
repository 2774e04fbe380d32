//! Keyboard/focus state machine for the search surface.
//!
//! The machine owns no rendering: the host delivers discrete
//! [`SurfaceEvent`]s, reads the displayed list back via
//! [`SearchSurface::items`], and carries out any returned
//! [`SurfaceEffect`]. Ranking itself stays in [`SearchEngine`].

use crate::recent::{RecentList, RecentStore};
use crate::record::PageRecord;
use crate::route;
use crate::search::{SearchEngine, SearchHit};

/// Visibility state of the search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Closed,
    /// Open with an empty query: recent or suggested pages are shown.
    OpenEmpty,
    /// Open with a non-empty query: ranked results are shown.
    OpenQuerying,
}

/// Discrete input events delivered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The search input gained focus.
    FocusInput,
    /// The platform open-search shortcut (modifier + `k`).
    OpenShortcut,
    /// Bare `/`; ignored while another text input has focus.
    SlashKey { input_focused: bool },
    Escape,
    /// Pointer event outside the surface subtree.
    PointerOutside,
    /// The query text changed to this value.
    QueryChanged(String),
    ArrowDown,
    ArrowUp,
    /// Select the currently highlighted item.
    Enter,
    /// Pointer selection of the displayed item at this index.
    SelectItem(usize),
}

/// Effects the host must carry out after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEffect {
    /// Navigate to this target; the highlight parameter is already attached.
    Navigate(String),
}

/// One entry of the currently displayed list.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub title: String,
    pub href: String,
    pub snippet: Option<String>,
    /// Relevance score; `None` for recent/suggested entries.
    pub score: Option<f32>,
}

/// The interactive search surface.
///
/// Holds the ranked results for the current query, the bounded selection
/// index, and the recency list fed by route changes.
pub struct SearchSurface<S: RecentStore> {
    engine: SearchEngine,
    recent: RecentList<S>,
    suggested: Vec<PageRecord>,
    state: SurfaceState,
    query: String,
    selected: usize,
    results: Vec<SearchHit>,
}

impl<S: RecentStore> SearchSurface<S> {
    pub fn new(engine: SearchEngine, store: S, suggested: Vec<PageRecord>) -> Self {
        Self {
            engine,
            recent: RecentList::load(store),
            suggested,
            state: SurfaceState::Closed,
            query: String::new(),
            selected: 0,
            results: vec![],
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Index of the keyboard-highlighted item, clamped to the item list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Current recency entries, most recent first.
    pub fn recent(&self) -> &[PageRecord] {
        self.recent.entries()
    }

    /// Items currently shown: ranked results while querying, otherwise the
    /// recency list, falling back to the suggested set before any visit.
    pub fn items(&self) -> Vec<DisplayItem> {
        match self.state {
            SurfaceState::Closed => vec![],
            SurfaceState::OpenQuerying => self
                .results
                .iter()
                .map(|hit| DisplayItem {
                    title: hit.record.title.clone(),
                    href: hit.record.href.clone(),
                    snippet: hit.snippet.clone(),
                    score: Some(hit.score),
                })
                .collect(),
            SurfaceState::OpenEmpty => {
                let source = if self.recent.is_empty() {
                    &self.suggested
                } else {
                    self.recent.entries()
                };
                source
                    .iter()
                    .map(|record| DisplayItem {
                        title: record.title.clone(),
                        href: record.href.clone(),
                        snippet: record.description.clone(),
                        score: None,
                    })
                    .collect()
            }
        }
    }

    /// Feeds one event through the machine.
    pub fn handle(&mut self, event: SurfaceEvent) -> Option<SurfaceEffect> {
        match event {
            SurfaceEvent::FocusInput | SurfaceEvent::OpenShortcut => {
                self.open();
                None
            }
            SurfaceEvent::SlashKey { input_focused } => {
                if !input_focused {
                    self.open();
                }
                None
            }
            SurfaceEvent::Escape | SurfaceEvent::PointerOutside => {
                self.close();
                None
            }
            SurfaceEvent::QueryChanged(query) => {
                self.query = query;
                self.selected = 0;
                self.results = self.engine.search(&self.query);
                if self.state != SurfaceState::Closed {
                    self.state = if self.query.is_empty() {
                        SurfaceState::OpenEmpty
                    } else {
                        SurfaceState::OpenQuerying
                    };
                }
                None
            }
            SurfaceEvent::ArrowDown => {
                self.move_selection(1);
                None
            }
            SurfaceEvent::ArrowUp => {
                self.move_selection(-1);
                None
            }
            SurfaceEvent::Enter => {
                let items = self.items();
                items
                    .get(self.selected)
                    .map(|item| item.href.clone())
                    .map(|href| self.select(&href))
            }
            SurfaceEvent::SelectItem(index) => {
                let items = self.items();
                items
                    .get(index)
                    .map(|item| item.href.clone())
                    .map(|href| self.select(&href))
            }
        }
    }

    /// Route-change hook: records a visit when the new path is a known page.
    pub fn on_route_change(&mut self, path: &str) {
        if let Some(record) = self.engine.index().find_by_path(path) {
            let record = record.clone();
            tracing::debug!("recording visit to {}", record.href);
            self.recent.record_visit(&record);
        }
    }

    fn open(&mut self) {
        if self.state == SurfaceState::Closed {
            self.state = if self.query.is_empty() {
                SurfaceState::OpenEmpty
            } else {
                SurfaceState::OpenQuerying
            };
        }
    }

    fn close(&mut self) {
        self.state = SurfaceState::Closed;
        self.query.clear();
        self.selected = 0;
        self.results.clear();
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.items().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    fn select(&mut self, href: &str) -> SurfaceEffect {
        let target = route::target_with_highlight(href, self.query.trim());
        self.close();
        SurfaceEffect::Navigate(target)
    }
}
