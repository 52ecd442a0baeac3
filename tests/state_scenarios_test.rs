//! End-to-end scenarios for the explorer state machine

mod common;

use common::{numbered_countries, sample_dataset_path};
use country_explorer::{
    Event, ExplorerState, LoadState, Palette, PaletteColor, ScriptedRandom, load_countries,
    reduce,
};

fn new_state(script: Vec<usize>) -> ExplorerState<ScriptedRandom> {
    ExplorerState::new(Palette::default(), ScriptedRandom::new(script))
}

fn assert_conserved(state: &ExplorerState<ScriptedRandom>) {
    let held: Vec<&PaletteColor> = state.selection().color.iter().collect();
    assert_eq!(state.available_colors().len() + held.len(), state.palette().len());
    for color in state.palette().colors() {
        let in_pool = state.available_colors().iter().filter(|c| *c == color).count();
        let in_use = held.iter().filter(|c| **c == color).count();
        assert_eq!(in_pool + in_use, 1, "color {} must appear exactly once", color.name);
    }
}

#[test]
fn test_auto_select_fifteen_countries() {
    let state = reduce(new_state(vec![0]), Event::DatasetLoaded(numbered_countries(15)));
    assert_eq!(state.selection().selected_index, Some(9));
    assert_conserved(&state);
}

#[test]
fn test_auto_select_three_countries() {
    let state = reduce(new_state(vec![0]), Event::DatasetLoaded(numbered_countries(3)));
    assert_eq!(state.selection().selected_index, Some(2));
}

#[test]
fn test_auto_select_no_countries() {
    let state = reduce(new_state(vec![0]), Event::DatasetLoaded(Vec::new()));
    assert_eq!(state.selection().selected_index, None);
    assert_eq!(state.selection().color, None);
    assert_conserved(&state);
}

#[test]
fn test_selection_toggle_scenario() {
    // Empty dataset start so no auto-selection holds a color
    let mut state = reduce(new_state(vec![1, 2, 0, 3]), Event::DatasetLoaded(Vec::new()));
    state.dispatch(Event::DatasetLoaded(numbered_countries(8)));
    // Auto-select took row 7 with draw index 1 (green)
    assert_eq!(state.selection().selected_index, Some(7));
    state.dispatch(Event::RowActivated(7));
    assert_eq!(state.selection().selected_index, None);
    assert_conserved(&state);

    // click(2) selects row 2 with a palette color C1
    state.dispatch(Event::RowActivated(2));
    assert_eq!(state.selection().selected_index, Some(2));
    let c1 = state.selection().color.clone().expect("color drawn");
    assert!(state.palette().contains(&c1));
    assert!(!state.available_colors().contains(&c1));

    // click(2) again deselects and C1 returns to the pool
    state.dispatch(Event::RowActivated(2));
    assert_eq!(state.selection().selected_index, None);
    assert!(state.available_colors().contains(&c1));
    assert_conserved(&state);

    // click(5) then click(7): row 5's color is released before row 7's draw
    state.dispatch(Event::RowActivated(5));
    let row5_color = state.selection().color.clone().expect("color drawn");
    state.dispatch(Event::RowActivated(7));
    assert_eq!(state.selection().selected_index, Some(7));
    assert_conserved(&state);
    // Draw index 3 on a 4-color pool only exists if row 5's color came back first
    assert_eq!(state.selection().color.as_ref(), Some(&row5_color));
}

#[test]
fn test_refilter_forcibly_moves_selection() {
    let mut state = reduce(new_state(vec![0]), Event::DatasetLoaded(numbered_countries(30)));
    state.dispatch(Event::RowActivated(20));
    assert_eq!(state.selection().selected_index, Some(20));

    // Any recompute replaces the user's choice with the default
    state.dispatch(Event::QueryChanged("Country".to_string()));
    assert_eq!(state.selection().selected_index, Some(9));

    state.dispatch(Event::QueryChanged("Country 2".to_string()));
    // "Country 2" and "Country 20".."Country 29"
    assert_eq!(state.filtered().len(), 11);
    assert_eq!(state.selection().selected_index, Some(9));
    assert_conserved(&state);
}

#[test]
fn test_page_resets_on_recompute_but_not_on_click() {
    let mut state = reduce(new_state(vec![0]), Event::DatasetLoaded(numbered_countries(40)));
    state.dispatch(Event::PageSelected(4));
    assert_eq!(state.current_page(), 4);
    assert_eq!(state.visible_page().len(), 7);

    state.dispatch(Event::RowActivated(35));
    assert_eq!(state.current_page(), 4);

    state.dispatch(Event::QueryChanged("country 3".to_string()));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_page_beyond_range_is_empty() {
    let mut state = reduce(new_state(vec![0]), Event::DatasetLoaded(numbered_countries(5)));
    state.dispatch(Event::PageSelected(9));
    assert!(state.visible_page().is_empty());
    assert!(state.visible_rows().is_empty());
}

#[test]
fn test_dataset_failure_then_recovery() {
    let mut state = new_state(vec![0]);
    state.dispatch(Event::DatasetUnavailable("timeout".to_string()));
    assert!(matches!(state.load_state(), LoadState::Unavailable(_)));
    assert!(state.filtered().is_empty());
    assert_eq!(state.selection().selected_index, None);

    state.dispatch(Event::DatasetLoaded(numbered_countries(12)));
    assert_eq!(state.load_state(), &LoadState::Loaded);
    assert_eq!(state.selection().selected_index, Some(9));
    assert_conserved(&state);
}

#[test]
fn test_query_survives_dataset_reload() {
    let mut state = new_state(vec![0]);
    state.dispatch(Event::QueryChanged("search:ger".to_string()));
    assert!(state.filtered().is_empty());

    let dataset = load_countries(&sample_dataset_path()).expect("Load sample");
    state.dispatch(Event::DatasetLoaded(dataset));
    assert_eq!(state.filtered().len(), 4);
    assert_eq!(state.selection().selected_index, Some(3));
    assert_eq!(state.selected_country().unwrap().name, "Nigeria");
}

#[test]
fn test_single_color_palette_reselection() {
    let palette = Palette::new(vec![PaletteColor::new("only", [1, 2, 3])]);
    let mut state = ExplorerState::new(palette, ScriptedRandom::first());
    state.dispatch(Event::DatasetLoaded(numbered_countries(4)));

    for index in [0, 1, 2, 3, 3, 0] {
        state.dispatch(Event::RowActivated(index));
        if state.selection().selected_index.is_some() {
            assert_eq!(state.selection().color.as_ref().unwrap().name, "only");
        }
        assert_conserved(&state);
    }
}
