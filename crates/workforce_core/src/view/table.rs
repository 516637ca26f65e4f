//! Table controller state machine.
//!
//! Transitions:
//! - `set_search_term` and `set_category` reset the page to 1.
//! - `set_sort_key` applies the toggle rule and keeps the page.
//! - `set_page` is ignored unless the page lies in `1..=total_pages` of the
//!   freshly computed result.
//! - `replace_rows` keeps the page when still valid, otherwise clamps it into
//!   `1..=max(total_pages, 1)`.

use crate::query::field::Tabular;
use crate::query::pipeline::{query, CategoryFilter, QueryPage, QueryParams, SortSpec};
use log::debug;

/// Query parameters held by one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<C> {
    pub search_term: String,
    pub sort: Option<SortSpec<C>>,
    pub current_page: usize,
    pub category: CategoryFilter<C>,
}

impl<C> Default for ViewState<C> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            current_page: 1,
            category: CategoryFilter::All,
        }
    }
}

/// Coarse state of a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Every parameter is at the view's defaults.
    Idle,
    /// At least one of search, sort, page or category differs from defaults.
    Active,
}

/// Search/sort/paginate controller for one table of `R` records.
#[derive(Debug, Clone)]
pub struct TableController<R: Tabular> {
    rows: Vec<R>,
    search_columns: Vec<R::Column>,
    page_size: usize,
    defaults: ViewState<R::Column>,
    state: ViewState<R::Column>,
    view: QueryPage<R>,
}

impl<R> TableController<R>
where
    R: Tabular + Clone,
{
    /// Creates an idle controller over `rows`.
    pub fn new(rows: Vec<R>, search_columns: Vec<R::Column>, page_size: usize) -> Self {
        let mut controller = Self {
            rows,
            search_columns,
            page_size,
            defaults: ViewState::default(),
            state: ViewState::default(),
            view: QueryPage::default(),
        };
        controller.recompute();
        controller
    }

    /// Makes `spec` part of this view's defaults (e.g. newest employees first).
    pub fn with_initial_sort(mut self, spec: SortSpec<R::Column>) -> Self {
        self.defaults.sort = Some(spec);
        self.state.sort = Some(spec);
        self.recompute();
        self
    }

    pub fn state(&self) -> &ViewState<R::Column> {
        &self.state
    }

    /// Current page of results.
    pub fn view(&self) -> &QueryPage<R> {
        &self.view
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn phase(&self) -> ViewPhase {
        if self.state == self.defaults {
            ViewPhase::Idle
        } else {
            ViewPhase::Active
        }
    }

    /// Changes the search term and returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.state.current_page = 1;
        self.recompute();
    }

    /// Clicks a sort header: same key flips direction, new key sorts ascending.
    pub fn set_sort_key(&mut self, key: R::Column) {
        self.state.sort = Some(SortSpec::toggle(self.state.sort, key));
        self.recompute();
    }

    /// Changes the category predicate and returns to page 1.
    pub fn set_category(&mut self, category: CategoryFilter<R::Column>) {
        self.state.category = category;
        self.state.current_page = 1;
        self.recompute();
    }

    /// Moves to `page` when it exists; returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.view.total_pages {
            debug!(
                "event=view_set_page module=view status=ignored page={} total_pages={}",
                page, self.view.total_pages
            );
            return false;
        }
        if page == self.state.current_page {
            return false;
        }
        self.state.current_page = page;
        self.recompute();
        true
    }

    /// Swaps in a new record collection (e.g. after a store change).
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.recompute();
        let last_page = self.view.total_pages.max(1);
        if self.state.current_page > last_page {
            self.state.current_page = last_page;
            self.recompute();
        }
    }

    /// Returns every parameter to the view's defaults.
    pub fn reset(&mut self) {
        self.state = self.defaults.clone();
        self.recompute();
    }

    fn params(&self) -> QueryParams<R::Column> {
        QueryParams {
            search: self.state.search_term.clone(),
            search_columns: self.search_columns.clone(),
            category: self.state.category.clone(),
            sort: self.state.sort,
            page: self.state.current_page,
            page_size: self.page_size,
        }
    }

    fn recompute(&mut self) {
        self.view = query(&self.rows, &self.params());
    }
}
