use tracing::debug;

use super::palette::PaletteColor;
use super::pool::ColorPool;
use super::random::RandomSource;

/// Row auto-selected after a recompute when the list is long enough (the 10th row)
pub const AUTO_SELECT_INDEX: usize = 9;

/// The single selected row and its highlight color.
///
/// `color` is `None` while a row is selected only if the pool was exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_index: Option<usize>,
    pub color: Option<PaletteColor>,
}

impl SelectionState {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }
}

/// Row that gets selected after a list of `len` rows is recomputed.
///
/// The 10th row when there are at least ten, otherwise the last row, otherwise none.
pub fn auto_select_index(len: usize) -> Option<usize> {
    if len > AUTO_SELECT_INDEX { Some(AUTO_SELECT_INDEX) } else { len.checked_sub(1) }
}

/// Owns the selection and keeps it consistent with the color pool
#[derive(Debug, Clone)]
pub struct SelectionCoordinator<R> {
    pool: ColorPool<R>,
    state: SelectionState,
}

impl<R: RandomSource> SelectionCoordinator<R> {
    pub fn new(pool: ColorPool<R>) -> Self {
        Self { pool, state: SelectionState::default() }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    pub fn selected_color(&self) -> Option<&PaletteColor> {
        self.state.color.as_ref()
    }

    pub fn pool(&self) -> &ColorPool<R> {
        &self.pool
    }

    /// Toggle `index`: clicking the selected row deselects it, any other row moves the
    /// selection there (releasing the old color before drawing a new one)
    pub fn click(&mut self, index: usize) {
        if self.state.selected_index == Some(index) {
            debug!(index, "deselecting row");
            self.clear();
        } else {
            debug!(index, previous = ?self.state.selected_index, "selecting row");
            self.select(index);
        }
    }

    /// Re-apply the default selection after the filtered list was rebuilt.
    ///
    /// Always replaces whatever the user had selected and re-draws a color, even when
    /// the auto-selected index is unchanged.
    pub fn on_filtered_list_changed(&mut self, len: usize) {
        match auto_select_index(len) {
            Some(index) => self.select(index),
            None => self.clear(),
        }
        debug!(len, selected = ?self.state.selected_index, "auto-selected after recompute");
    }

    /// Drop the selection and return its color to the pool
    pub fn clear(&mut self) {
        if let Some(color) = self.state.color.take() {
            self.pool.deselect(color);
        }
        self.state.selected_index = None;
    }

    fn select(&mut self, index: usize) {
        let previous = self.state.color.take();
        let color = self.pool.select(previous);
        self.state = SelectionState { selected_index: Some(index), color };
    }
}
