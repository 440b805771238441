//! State container for the worklist viewer.
//!
//! Every field here is mutated only inside the app's `update`; the derived
//! views (filtered/sorted items, stats, page counts) are recomputed on
//! demand from the pure pipeline stages in [`super::logic`].

use crate::api::{Item, ItemQuery, StatusFilter};
use crate::tui::TextInputState;

use super::logic::sort::SortConfig;
use super::logic::stats::{self, Stats};
use super::logic::{filter, paginate, sort};

/// Startup filter state, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct ViewerParams {
    pub status: Option<StatusFilter>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// Lifecycle of the in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No request pending; fetch actions enabled.
    #[default]
    Idle,
    /// Request awaited; ticker and estimator running.
    InFlight,
    /// Request settled; the bar shows 100% for a short beat before hiding.
    Settling,
}

/// Which control owns key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Status,
    FromDate,
    ToDate,
    Search,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Status => Self::FromDate,
            Self::FromDate => Self::ToDate,
            Self::ToDate => Self::Search,
            Self::Search => Self::Table,
            Self::Table => Self::Status,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Status => Self::Table,
            Self::FromDate => Self::Status,
            Self::ToDate => Self::FromDate,
            Self::Search => Self::ToDate,
            Self::Table => Self::Search,
        }
    }
}

/// All mutable view state of the viewer.
#[derive(Debug)]
pub struct State {
    /// Last fetched set, replaced wholesale on every successful fetch.
    pub items: Vec<Item>,
    /// True forever after the first fetch attempt, success or failure.
    pub has_searched: bool,
    /// Connectivity error from the last settled fetch, if it failed.
    pub error: Option<String>,
    pub phase: FetchPhase,
    /// Monotonic fetch counter. Settlement and settle-delay messages carry
    /// the generation they belong to, so anything stale is dropped.
    pub generation: u64,
    /// Cosmetic elapsed seconds, advanced 0.1 per ticker tick.
    pub elapsed: f64,
    /// Estimator percentage, 0..=100.
    pub progress: f64,

    /// Server-side status bucket; applied on the next fetch, not locally.
    pub status_filter: StatusFilter,
    pub from_date: TextInputState,
    pub to_date: TextInputState,
    pub search: TextInputState,
    pub sort: SortConfig,
    /// 1-based page of the filtered view.
    pub current_page: usize,
    pub focus: Focus,
}

impl Default for State {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            has_searched: false,
            error: None,
            phase: FetchPhase::default(),
            generation: 0,
            elapsed: 0.0,
            progress: 0.0,
            status_filter: StatusFilter::default(),
            from_date: TextInputState::default(),
            to_date: TextInputState::default(),
            search: TextInputState::default(),
            sort: SortConfig::default(),
            current_page: 1,
            focus: Focus::default(),
        }
    }
}

impl State {
    /// Whether the viewer is between fetch start and indicator hide.
    pub fn loading(&self) -> bool {
        self.phase != FetchPhase::Idle
    }

    /// Filtered and sorted view of the fetched set.
    pub fn visible_items(&self) -> Vec<&Item> {
        let mut visible: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| {
                filter::matches(
                    item,
                    &self.search.value,
                    &self.from_date.value,
                    &self.to_date.value,
                )
            })
            .collect();
        sort::sort_items(&mut visible, self.sort);
        visible
    }

    /// Counts over the full fetched set, independent of local filters.
    pub fn stats(&self) -> Stats {
        stats::compute(&self.items)
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.visible_items().len())
    }

    /// Reset the per-request indicators and enter `InFlight`. A forced
    /// refresh also snaps back to page 1; the plain search action keeps the
    /// page. Returns the new fetch generation.
    pub fn begin_fetch(&mut self, force: bool) -> u64 {
        self.phase = FetchPhase::InFlight;
        self.has_searched = true;
        self.elapsed = 0.0;
        self.progress = 0.0;
        if force {
            self.current_page = 1;
        }
        self.generation += 1;
        self.generation
    }

    /// Query descriptor for the current filter state (without the force
    /// flag; the caller owns that).
    pub fn query(&self) -> ItemQuery {
        ItemQuery::new(self.status_filter)
            .from_date(self.from_date.value.clone())
            .to_date(self.to_date.value.clone())
    }

    /// Reset date bounds, search, sort, and page; the fetched items and the
    /// status filter stay.
    pub fn clear_filters(&mut self) {
        self.from_date.clear();
        self.to_date.clear();
        self.search.clear();
        self.sort = SortConfig::default();
        self.current_page = 1;
    }
}
