//! Country Explorer - Filter, group, page through and highlight a list of countries
//!
//! The library holds the state machine behind the country table:
//!
//! - Parsing the filter mini-language (`search:` and `group:` tokens)
//! - Filtering the dataset by name and grouping by currency
//! - Fixed-size pagination (11 rows per page)
//! - Single-row selection with non-repeating highlight colors
//! - Loading the dataset from a GraphQL-shaped JSON file
//!
//! # Example
//!
//! ```
//! use country_explorer::{Country, Event, ExplorerState, Palette, ScriptedRandom};
//!
//! let mut state = ExplorerState::new(Palette::default(), ScriptedRandom::first());
//! state.dispatch(Event::DatasetLoaded(vec![
//!     Country::new("France", "EUR"),
//!     Country::new("Germany", "EUR"),
//!     Country::new("Ghana", "GHS"),
//! ]));
//! state.dispatch(Event::QueryChanged("search:g group:eur".to_string()));
//!
//! assert_eq!(state.filtered().len(), 1);
//! assert_eq!(state.selection().selected_index, Some(0));
//! ```

pub mod cli;
pub mod config;
pub mod filters;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod parsers;
pub mod selection;
pub mod state;
pub mod tui;

// Re-export commonly used types
pub use filters::{QueryModel, apply_query, parse_query};
pub use models::{Country, Language};
pub use pagination::{PAGE_SIZE, PageState, page, page_count};
pub use parsers::load_countries;
pub use selection::{
    ColorPool, Palette, PaletteColor, RandomSource, ScriptedRandom, SelectionCoordinator,
    SelectionState,
};
pub use state::{Event, ExplorerState, LoadState, reduce};
