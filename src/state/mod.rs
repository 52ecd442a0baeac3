//! Explorer state machine.
//!
//! All UI state lives in one [`ExplorerState`] and changes only through [`Event`]s.
//! Each event is handled to completion before the next one: a dataset arrival or query
//! change runs the whole pipeline
//!
//! ```text
//! raw text -> parse_query -> apply_query -> PageState::reset -> auto-select
//! ```
//!
//! so no partially recomputed state is ever observable. Row clicks and page changes do
//! not touch the filtered list.
//!
//! Rows are addressed by their index in the filtered list. Renderers that work with
//! page-relative rows convert with [`ExplorerState::absolute_index`].

use tracing::{debug, info, warn};

use crate::filters::{QueryModel, apply_query, parse_query};
use crate::models::Country;
use crate::pagination::{PageState, page_count};
use crate::selection::{
    ColorPool, Palette, PaletteColor, RandomSource, SelectionCoordinator, SelectionState,
};

/// Input events, one per user or data-source action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Data source delivered the dataset
    DatasetLoaded(Vec<Country>),
    /// Data source failed; treated as an empty dataset
    DatasetUnavailable(String),
    /// Filter input text changed
    QueryChanged(String),
    /// Primary activation of a row (toggles selection)
    RowActivated(usize),
    /// Secondary activation of a row (opens its detail view)
    DetailsOpened(usize),
    DetailsClosed,
    /// Page selector used; does not recompute the filter
    PageSelected(usize),
}

/// Where the dataset currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Unavailable(String),
}

/// A row of the current page as a renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// Index in the filtered list
    pub index: usize,
    pub country: &'a Country,
    pub selected: bool,
    pub color: Option<&'a PaletteColor>,
}

/// Complete explorer state
#[derive(Debug, Clone)]
pub struct ExplorerState<R> {
    dataset: Vec<Country>,
    load_state: LoadState,
    query: QueryModel,
    filtered: Vec<Country>,
    page: PageState,
    selection: SelectionCoordinator<R>,
    details: Option<usize>,
}

/// Apply one event and return the resulting state
pub fn reduce<R: RandomSource>(mut state: ExplorerState<R>, event: Event) -> ExplorerState<R> {
    state.dispatch(event);
    state
}

impl<R: RandomSource> ExplorerState<R> {
    /// Empty state waiting for the dataset
    pub fn new(palette: Palette, rng: R) -> Self {
        Self {
            dataset: Vec::new(),
            load_state: LoadState::Pending,
            query: QueryModel::default(),
            filtered: Vec::new(),
            page: PageState::new(),
            selection: SelectionCoordinator::new(ColorPool::new(palette, rng)),
            details: None,
        }
    }

    /// Apply one event in place
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::DatasetLoaded(countries) => {
                info!(count = countries.len(), "dataset loaded");
                self.dataset = countries;
                self.load_state = LoadState::Loaded;
                self.recompute();
            }
            Event::DatasetUnavailable(reason) => {
                warn!(%reason, "dataset unavailable");
                self.dataset.clear();
                self.load_state = LoadState::Unavailable(reason);
                self.recompute();
            }
            Event::QueryChanged(raw) => {
                self.query = parse_query(&raw);
                self.recompute();
            }
            Event::RowActivated(index) => {
                if index < self.filtered.len() {
                    self.selection.click(index);
                } else {
                    debug!(index, len = self.filtered.len(), "ignoring activation of missing row");
                }
            }
            Event::DetailsOpened(index) => {
                if index < self.filtered.len() {
                    self.details = Some(index);
                } else {
                    debug!(index, len = self.filtered.len(), "ignoring details for missing row");
                }
            }
            Event::DetailsClosed => self.details = None,
            Event::PageSelected(page) => self.page.select(page),
        }
    }

    /// Rebuild everything derived from (dataset, query)
    fn recompute(&mut self) {
        self.filtered = apply_query(&self.dataset, &self.query);
        self.page.reset();
        self.details = None;
        self.selection.on_filtered_list_changed(self.filtered.len());
        debug!(
            filtered = self.filtered.len(),
            pages = self.page_count(),
            selected = ?self.selection.selected_index(),
            "recomputed filtered list"
        );
    }

    pub fn dataset(&self) -> &[Country] {
        &self.dataset
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn query(&self) -> &QueryModel {
        &self.query
    }

    pub fn filtered(&self) -> &[Country] {
        &self.filtered
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.page.page_size())
    }

    /// Countries on the current page
    pub fn visible_page(&self) -> &[Country] {
        self.page.visible(&self.filtered)
    }

    /// Current page rows with their filtered-list index and highlight
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        let offset = self.page.offset();
        let selection = self.selection.selection();
        self.visible_page()
            .iter()
            .enumerate()
            .map(|(row, country)| {
                let index = offset + row;
                let selected = selection.is_selected(index);
                VisibleRow {
                    index,
                    country,
                    selected,
                    color: if selected { selection.color.as_ref() } else { None },
                }
            })
            .collect()
    }

    /// Filtered-list index of a page-relative row, if that row exists
    pub fn absolute_index(&self, row: usize) -> Option<usize> {
        let index = self.page.offset() + row;
        (row < self.visible_page().len()).then_some(index)
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.selection()
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selection.selected_index().and_then(|index| self.filtered.get(index))
    }

    /// Colors not assigned to any row
    pub fn available_colors(&self) -> &[PaletteColor] {
        self.selection.pool().available()
    }

    pub fn palette(&self) -> &Palette {
        self.selection.pool().palette()
    }

    /// Country whose detail view is open
    pub fn details(&self) -> Option<&Country> {
        self.details.and_then(|index| self.filtered.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ScriptedRandom;

    fn countries(n: usize) -> Vec<Country> {
        (0..n).map(|i| Country::new(format!("Country {i}"), "EUR")).collect()
    }

    fn state() -> ExplorerState<ScriptedRandom> {
        ExplorerState::new(Palette::default(), ScriptedRandom::first())
    }

    #[test]
    fn test_new_state_is_pending_and_empty() {
        let state = state();
        assert_eq!(state.load_state(), &LoadState::Pending);
        assert!(state.filtered().is_empty());
        assert_eq!(state.selection().selected_index, None);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_count(), 0);
    }

    #[test]
    fn test_dataset_loaded_auto_selects_tenth_row() {
        let state = reduce(state(), Event::DatasetLoaded(countries(15)));
        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.filtered().len(), 15);
        assert_eq!(state.selection().selected_index, Some(9));
        assert!(state.selection().color.is_some());
        assert_eq!(state.page_count(), 2);
    }

    #[test]
    fn test_dataset_unavailable_renders_empty() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(5)));
        state.dispatch(Event::DatasetUnavailable("connection refused".to_string()));
        assert!(state.filtered().is_empty());
        assert_eq!(state.selection().selected_index, None);
        assert_eq!(state.available_colors().len(), 4);
        assert_eq!(
            state.load_state(),
            &LoadState::Unavailable("connection refused".to_string())
        );
    }

    #[test]
    fn test_query_change_resets_page_and_reselects() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(30)));
        state.dispatch(Event::PageSelected(3));
        state.dispatch(Event::RowActivated(25));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.selection().selected_index, Some(25));

        state.dispatch(Event::QueryChanged("country 1".to_string()));
        // "Country 1", "Country 10".."Country 19" = 11 rows
        assert_eq!(state.filtered().len(), 11);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.selection().selected_index, Some(9));
    }

    #[test]
    fn test_page_selected_does_not_recompute() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(30)));
        state.dispatch(Event::RowActivated(3));
        state.dispatch(Event::PageSelected(2));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.selection().selected_index, Some(3));
        assert_eq!(state.visible_page()[0].name, "Country 11");
    }

    #[test]
    fn test_row_activation_out_of_range_is_ignored() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(3)));
        state.dispatch(Event::RowActivated(7));
        assert_eq!(state.selection().selected_index, Some(2));
    }

    #[test]
    fn test_details_do_not_touch_selection_or_pool() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(5)));
        let selection_before = state.selection().clone();
        let available_before = state.available_colors().to_vec();

        state.dispatch(Event::DetailsOpened(1));
        assert_eq!(state.details().unwrap().name, "Country 1");
        assert_eq!(state.selection(), &selection_before);
        assert_eq!(state.available_colors(), available_before.as_slice());

        state.dispatch(Event::DetailsClosed);
        assert!(state.details().is_none());
    }

    #[test]
    fn test_details_closed_on_recompute() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(5)));
        state.dispatch(Event::DetailsOpened(0));
        state.dispatch(Event::QueryChanged("2".to_string()));
        assert!(state.details().is_none());
    }

    #[test]
    fn test_visible_rows_mark_selection_on_current_page() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(15)));
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 11);
        assert!(rows[9].selected);
        assert!(rows[9].color.is_some());
        assert!(rows.iter().filter(|row| row.selected).count() == 1);

        state.dispatch(Event::PageSelected(2));
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].index, 11);
        assert!(rows.iter().all(|row| !row.selected));
    }

    #[test]
    fn test_absolute_index() {
        let mut state = reduce(state(), Event::DatasetLoaded(countries(15)));
        assert_eq!(state.absolute_index(3), Some(3));
        state.dispatch(Event::PageSelected(2));
        assert_eq!(state.absolute_index(3), Some(14));
        assert_eq!(state.absolute_index(4), None);
    }

    #[test]
    fn test_selected_country() {
        let state = reduce(state(), Event::DatasetLoaded(countries(4)));
        assert_eq!(state.selected_country().unwrap().name, "Country 3");
    }
}
